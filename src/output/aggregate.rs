//! Aggregation of crawl output into hosting buckets

use crate::output::classification::CrawlOutput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Projects whose external share is below this percentage land in `external1`
pub const EXTERNAL_SPLIT_PERCENT: f64 = 50.0;

/// Projects grouped by how their files are hosted
///
/// A project may sit in several buckets. Fields are declared in key order so
/// the serialized object has sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Projects with external files making up less than half of their files
    pub external1: Vec<String>,
    /// Projects with external files making up half or more of their files
    pub external2: Vec<String>,
    /// Projects with at least one internally hosted file
    pub internal: Vec<String>,
    /// Projects with at least one unsafe file
    #[serde(rename = "unsafe")]
    pub r#unsafe: Vec<String>,
}

/// Computes the aggregate report of a crawl
///
/// Projects with no files at all are left out of every bucket.
///
/// # Example
///
/// ```
/// use index_hosting_survey::output::{aggregate, Classification, CrawlOutput};
///
/// let mut output = CrawlOutput::new();
/// output.insert(
///     "p".to_string(),
///     Classification {
///         internal: vec![],
///         external: vec!["x.zip".to_string()],
///         r#unsafe: vec![],
///     },
/// );
/// assert_eq!(aggregate(&output).external2, vec!["p".to_string()]);
/// ```
pub fn aggregate(output: &CrawlOutput) -> AggregateReport {
    let mut internal = BTreeSet::new();
    let mut external1 = BTreeSet::new();
    let mut external2 = BTreeSet::new();
    let mut r#unsafe = BTreeSet::new();

    for (project, files) in output {
        let total = files.total();
        if total == 0 {
            continue;
        }

        if !files.internal.is_empty() {
            internal.insert(project.clone());
        }

        if !files.external.is_empty() {
            let percent = 100.0 * files.external.len() as f64 / total as f64;
            if percent < EXTERNAL_SPLIT_PERCENT {
                external1.insert(project.clone());
            } else {
                external2.insert(project.clone());
            }
        }

        if !files.r#unsafe.is_empty() {
            r#unsafe.insert(project.clone());
        }
    }

    AggregateReport {
        external1: external1.into_iter().collect(),
        external2: external2.into_iter().collect(),
        internal: internal.into_iter().collect(),
        r#unsafe: r#unsafe.into_iter().collect(),
    }
}
