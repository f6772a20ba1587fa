//! Crawl driver
//!
//! Enumerates every project at the index root and scrapes them one after
//! another. Each project is awaited to completion before the next starts.

use crate::crawler::fetcher::PageSource;
use crate::crawler::parser::extract_anchors;
use crate::crawler::project::{normalize_base, scrape_project};
use crate::output::CrawlOutput;
use crate::FetchError;
use std::collections::HashSet;

/// Lists every project name linked from the index root
///
/// Names are the anchors' trimmed text, in document order; anchors with no
/// text are ignored.
pub async fn list_all_projects<S: PageSource>(
    source: &S,
    base_url: &str,
) -> Result<Vec<String>, FetchError> {
    let root = normalize_base(base_url);
    let page = source.fetch(&root).await?;

    Ok(extract_anchors(&page.body)
        .into_iter()
        .map(|anchor| anchor.text.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

/// Crawls the whole index
///
/// Every project found at the root gets an entry, even when its own scrape
/// failed. Only a failure to fetch the root itself is returned as an error.
pub async fn crawl_index<S: PageSource>(
    source: &S,
    base_url: &str,
) -> Result<CrawlOutput, FetchError> {
    let projects = list_all_projects(source, base_url).await?;
    tracing::info!("Found {} projects at {}", projects.len(), base_url);

    let mut output = CrawlOutput::new();
    let mut seen = HashSet::new();

    for (index, project) in projects.iter().enumerate() {
        if !seen.insert(project.as_str()) {
            tracing::debug!("Skipping duplicate project {}", project);
            continue;
        }

        tracing::debug!("[{}/{}] Processing {}", index + 1, projects.len(), project);
        let classification = scrape_project(source, base_url, project).await;
        output.insert(project.clone(), classification);
    }

    let empty = output.values().filter(|c| c.is_empty()).count();
    tracing::info!(
        "Crawled {} projects ({} with no discovered files)",
        output.len(),
        empty
    );

    Ok(output)
}
