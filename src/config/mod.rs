//! Configuration module for the survey
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so running without a
//! configuration file surveys the public Python package index.
//!
//! # Example
//!
//! ```no_run
//! use index_hosting_survey::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("survey.toml")).unwrap();
//! println!("Surveying index at {}", config.index.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, IndexConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
