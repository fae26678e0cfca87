//! Error types for the comparison engine.
//!
//! Comparison itself is infallible. Errors only arise when rendering a
//! result or loading configuration.

use thiserror::Error;

/// Errors raised by export and configuration loading.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The requested export format is not one of `json`, `csv`, `summary`.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// JSON encoding or decoding failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV encoding failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Rendered output was not valid UTF-8 or could not be flushed.
    #[error("Export encoding failed: {0}")]
    Encoding(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, CompareError>;
