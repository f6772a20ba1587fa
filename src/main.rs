//! Index Hosting Survey main entry point
//!
//! This is the command-line interface for the two survey stages: `crawl`
//! classifies every project on the index, `aggregate` turns that into a
//! hosting report.

use clap::{Parser, Subcommand};
use index_hosting_survey::config::{load_config, Config};
use index_hosting_survey::crawler::crawl;
use index_hosting_survey::output::{
    aggregate, print_summary, read_crawl_output, write_crawl_output, write_report,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Index Hosting Survey: where does a package index's software live?
///
/// The crawl stage walks every project on the index and records which of its
/// files are hosted by the index, hosted elsewhere with a checksum, or hosted
/// elsewhere without one. The aggregate stage summarizes that record.
#[derive(Parser, Debug)]
#[command(name = "index-hosting-survey")]
#[command(version)]
#[command(about = "Survey where a package index's files are hosted", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the index and write the per-project classification
    Crawl,

    /// Aggregate a crawl output into the hosting report
    Aggregate {
        /// Crawl output files to read; stdin when empty or `-`
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Crawl => {
            handle_crawl(&config, Path::new(&config.output.crawl_path)).await?;
        }
        Command::Aggregate { inputs } => {
            handle_aggregate(&inputs, Path::new(&config.output.report_path))?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("index_hosting_survey=info,warn"),
            1 => EnvFilter::new("index_hosting_survey=debug,info"),
            2 => EnvFilter::new("index_hosting_survey=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the crawl stage
async fn handle_crawl(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Crawling index at {}", config.index.base_url);

    let output = crawl(config).await.map_err(|e| {
        tracing::error!("Crawl failed: {}", e);
        e
    })?;

    write_crawl_output(path, &output)?;
    tracing::info!("Wrote {} projects to {}", output.len(), path.display());

    Ok(())
}

/// Handles the aggregate stage
fn handle_aggregate(inputs: &[PathBuf], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_inputs(inputs)?;
    let output = read_crawl_output(data.as_bytes())?;

    let report = aggregate(&output);
    print_summary(&report);

    write_report(path, &report)?;
    tracing::info!("Wrote report to {}", path.display());

    Ok(())
}

/// Concatenates the given inputs, reading stdin for `-` or when none are given
fn read_inputs(inputs: &[PathBuf]) -> std::io::Result<String> {
    let mut data = String::new();

    if inputs.is_empty() {
        std::io::stdin().read_to_string(&mut data)?;
        return Ok(data);
    }

    for input in inputs {
        if input.as_os_str() == "-" {
            std::io::stdin().read_to_string(&mut data)?;
        } else {
            data.push_str(&std::fs::read_to_string(input)?);
        }
    }

    Ok(data)
}
