//! Crawler module for index page fetching and processing
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching behind the [`PageSource`] trait
//! - HTML anchor extraction
//! - Per-project link classification
//! - Overall crawl driving

mod driver;
mod fetcher;
#[cfg(test)]
mod mock;
mod parser;
mod project;

pub use driver::{crawl_index, list_all_projects};
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageSource};
pub use parser::{extract_anchors, Anchor};
pub use project::{normalize_base, project_url, scrape_project};

use crate::config::Config;
use crate::output::CrawlOutput;
use crate::SurveyError;

/// Runs a complete crawl against the configured index
///
/// This is the main entry point for the crawl stage. It will:
/// 1. Build the HTTP client
/// 2. List every project at the index root
/// 3. Scrape and classify each project in turn
///
/// # Arguments
///
/// * `config` - The survey configuration
///
/// # Returns
///
/// * `Ok(CrawlOutput)` - Classification of every discovered project
/// * `Err(SurveyError)` - The client could not be built or the index root
///   could not be fetched
pub async fn crawl(config: &Config) -> Result<CrawlOutput, SurveyError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    Ok(crawl_index(&fetcher, &config.index.base_url).await?)
}
