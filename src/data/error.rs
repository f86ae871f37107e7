//! Error types for data operations
//!
//! Provides unified error handling for loading, validating and exporting
//! tables.

use thiserror::Error;

// Re-export CSV limits from constants module for consistency
pub use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};

/// Errors that can occur while reading or writing table data
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File is too large for loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows for loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// No columns found in data
    #[error("No columns found")]
    NoColumns,

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e.to_string())
    }
}

/// Reasons an uploaded table is rejected before any processing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Zero rows or zero columns
    #[error("The uploaded file is empty")]
    EmptyInput,

    /// Fewer than two columns
    #[error("File must contain at least two columns")]
    InsufficientColumns,

    /// A column name appears more than once
    #[error("File contains duplicate column names")]
    DuplicateColumns,
}
