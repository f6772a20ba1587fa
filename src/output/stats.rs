//! Human-readable summary of an aggregate report

use crate::output::aggregate::AggregateReport;

impl AggregateReport {
    /// Number of projects with any externally hosted files
    pub fn external_total(&self) -> usize {
        self.external1.len() + self.external2.len()
    }

    /// The five count lines printed by the aggregate stage
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Hosted on the index: {}", self.internal.len()),
            format!("Hosted Externally (<50%): {}", self.external1.len()),
            format!("Hosted Externally (>=50%): {}", self.external2.len()),
            format!("Hosted Externally: {}", self.external_total()),
            format!("Hosted Unsafely: {}", self.r#unsafe.len()),
        ]
    }
}

/// Prints the report summary to stdout
pub fn print_summary(report: &AggregateReport) {
    for line in report.summary_lines() {
        println!("{}", line);
    }
}
