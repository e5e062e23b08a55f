//! Error types for record-set output.

use thiserror::Error;

/// Errors that can occur while writing a record set.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
