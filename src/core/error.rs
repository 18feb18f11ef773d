//! Centralised error types for the command-line surface.
//!
//! The rendering pipeline itself is total; only ingestion and CLI argument
//! checks can fail.

use std::io;

use thiserror::Error;

use crate::core::data::ParseSamplesError;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--min {low} must be <= --max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by the CLI.
#[derive(Debug, Error)]
pub enum SparkError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseSamplesError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
