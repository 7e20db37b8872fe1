//! Error types for the thali library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for thali operations.
#[derive(Debug, Error)]
pub enum ThaliError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row that could not be turned into a restaurant record.
    #[error("Malformed record at row {row}: {message}")]
    MalformedRecord { row: usize, message: String },

    /// A required column was not present in the input header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A numeric field fell outside its declared range.
    #[error("{field} value {value} outside declared range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to aggregate.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for thali operations.
pub type Result<T> = std::result::Result<T, ThaliError>;
