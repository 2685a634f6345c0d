//! CLI error types.
//!
//! Wraps the engine error types plus the I/O and format errors that only
//! exist at the service layer.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument is missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator parameter validation failed.
    #[error("Generator error: {0}")]
    Generator(#[from] randgen_core::types::GeneratorError),

    /// Statistical test validation failed.
    #[error("Statistical test error: {0}")]
    Stats(#[from] randgen_stats::StatsError),

    /// Distribution mapping failed.
    #[error("Distribution error: {0}")]
    Distribution(#[from] randgen_dist::DistributionError),

    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
