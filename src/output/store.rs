//! JSON persistence for crawl output and aggregate reports

use crate::output::aggregate::AggregateReport;
use crate::output::classification::CrawlOutput;
use crate::SurveyError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Writes the crawl output as indented JSON with sorted keys
pub fn write_crawl_output(path: &Path, output: &CrawlOutput) -> Result<(), SurveyError> {
    write_json(path, output)
}

/// Reads crawl output previously written by [`write_crawl_output`]
///
/// Malformed input is returned as [`SurveyError::Json`].
pub fn read_crawl_output<R: Read>(reader: R) -> Result<CrawlOutput, SurveyError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes the aggregate report as indented JSON
pub fn write_report(path: &Path, report: &AggregateReport) -> Result<(), SurveyError> {
    write_json(path, report)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SurveyError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
