//! Output module for crawl results and aggregate reports
//!
//! This module handles:
//! - The per-project [`Classification`] and the [`CrawlOutput`] mapping
//! - Reading and writing both stages' JSON files
//! - Aggregating crawl output into hosting buckets and summarizing them

mod aggregate;
mod classification;
pub mod stats;
mod store;

pub use aggregate::{aggregate, AggregateReport, EXTERNAL_SPLIT_PERCENT};
pub use classification::{Classification, CrawlOutput};
pub use stats::print_summary;
pub use store::{read_crawl_output, write_crawl_output, write_report};
