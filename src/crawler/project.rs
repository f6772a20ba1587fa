//! Per-project scraping
//!
//! Fetches a project's listing page, classifies each file link into the
//! internal / external / unsafe buckets, follows `download` and `homepage`
//! links one level deep, and reconciles files that landed in more than one
//! bucket.

use crate::classify::{filename_of, is_installable, is_safe};
use crate::crawler::fetcher::PageSource;
use crate::crawler::parser::extract_anchors;
use crate::output::Classification;
use std::collections::BTreeSet;

/// Returns `base_url` with exactly one trailing slash
pub fn normalize_base(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

/// Builds the listing URL of a project: `<base>/<project>/`
///
/// # Example
///
/// ```
/// use index_hosting_survey::crawler::project_url;
///
/// assert_eq!(
///     project_url("https://pypi.python.org/simple", "requests"),
///     "https://pypi.python.org/simple/requests/"
/// );
/// ```
pub fn project_url(base_url: &str, project: &str) -> String {
    format!("{}{}/", normalize_base(base_url), project)
}

/// Scrapes a single project and classifies its files
///
/// A failed fetch of the listing page is logged and yields an empty
/// [`Classification`]; it never aborts the caller. A failed secondary page
/// is logged and skipped.
pub async fn scrape_project<S: PageSource>(
    source: &S,
    base_url: &str,
    project: &str,
) -> Classification {
    let url = project_url(base_url, project);

    let page = match source.fetch(&url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("An error occurred fetching {}: {}", url, e);
            return Classification::default();
        }
    };

    let mut internal = BTreeSet::new();
    let mut external = BTreeSet::new();
    let mut r#unsafe = BTreeSet::new();
    let mut secondary_urls = BTreeSet::new();

    for anchor in extract_anchors(&page.body) {
        let Some(href) = anchor.link() else {
            continue;
        };

        let filename = match filename_of(href) {
            Ok(filename) => filename.to_string(),
            Err(e) => {
                tracing::warn!("An error occurred parsing {}: {}", href, e);
                continue;
            }
        };
        let installable = is_installable(href);

        if anchor.has_rel("internal") {
            internal.insert(filename);
        } else if installable && is_safe(href) {
            external.insert(filename);
        } else if installable {
            r#unsafe.insert(filename);
        }

        if (anchor.has_rel("download") || anchor.has_rel("homepage")) && !installable {
            match page.url.join(href) {
                Ok(link) => {
                    secondary_urls.insert(link.to_string());
                }
                Err(e) => tracing::warn!("Cannot follow {}: {}", href, e),
            }
        }
    }

    for secondary in &secondary_urls {
        let page = match source.fetch(secondary).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("An error occurred fetching {}: {}", secondary, e);
                continue;
            }
        };

        // Off-index pages can't vouch for their checksums.
        for anchor in extract_anchors(&page.body) {
            let Some(href) = anchor.link() else {
                continue;
            };

            match filename_of(href) {
                Ok(filename) if is_installable(href) => {
                    r#unsafe.insert(filename.to_string());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("An error occurred parsing {} on {}: {}", href, secondary, e);
                }
            }
        }
    }

    tracing::debug!(
        "{}: {} internal, {} external, {} unsafe before reconciliation",
        project,
        internal.len(),
        external.len(),
        r#unsafe.len()
    );

    Classification::reconcile(internal, external, r#unsafe)
}
