use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

type ClassificationRow = (Vec<String>, Vec<String>, Vec<String>);

/// Files of one project, split by where they are hosted
///
/// Serialized as the three-element array `[internal, external, unsafe]`.
/// Values produced by [`Classification::reconcile`] are sorted, free of
/// duplicates and pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ClassificationRow", into = "ClassificationRow")]
pub struct Classification {
    /// Files the index hosts itself
    pub internal: Vec<String>,
    /// Files hosted elsewhere behind a verifiable checksum
    pub external: Vec<String>,
    /// Files hosted elsewhere with nothing to verify them against
    pub r#unsafe: Vec<String>,
}

/// Crawl stage output: project name to its classification, in key order
pub type CrawlOutput = BTreeMap<String, Classification>;

impl Classification {
    /// Builds a classification from raw buckets, resolving overlaps
    ///
    /// A file is counted once, in the most trusted bucket it appears in:
    /// internal beats external beats unsafe. `internal` is never modified.
    pub fn reconcile(
        internal: BTreeSet<String>,
        mut external: BTreeSet<String>,
        mut r#unsafe: BTreeSet<String>,
    ) -> Self {
        r#unsafe.retain(|f| !internal.contains(f) && !external.contains(f));
        external.retain(|f| !internal.contains(f));

        Self {
            internal: internal.into_iter().collect(),
            external: external.into_iter().collect(),
            r#unsafe: r#unsafe.into_iter().collect(),
        }
    }

    /// Total number of files across all buckets
    pub fn total(&self) -> usize {
        self.internal.len() + self.external.len() + self.r#unsafe.len()
    }

    /// Returns true if no files were discovered
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl From<ClassificationRow> for Classification {
    fn from((internal, external, r#unsafe): ClassificationRow) -> Self {
        Self {
            internal,
            external,
            r#unsafe,
        }
    }
}

impl From<Classification> for ClassificationRow {
    fn from(c: Classification) -> Self {
        (c.internal, c.external, c.r#unsafe)
    }
}
