//! Error types for frequency histogram computation
//!
//! Provides a unified error type for all freqhist crates.

use thiserror::Error;

/// Core error type for histogram and statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized histogram mode
    #[error("Invalid histogram type: {0}")]
    InvalidType(String),

    /// Malformed or missing range / bin-count structure
    #[error("Invalid bin options: {0}")]
    InvalidBinOptions(String),

    /// Non-numeric element, mismatched paired lengths or wrong shape
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Bin or statistics query before `calculate`
    #[error("Histogram has not been calculated")]
    NotCalculated,

    /// Data query before any data set was accepted
    #[error("Data has not been set")]
    NoData,

    /// Unrecognized bin-view filter
    #[error("Invalid bin filter: {0}")]
    InvalidFilter(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (for output sinks)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a non-numeric element at `index`
    pub fn non_numeric(context: &str, index: usize) -> Self {
        Self::InvalidData(format!("non-numeric item at index {index} in {context}"))
    }

    /// Create an error for paired sequences of different length
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidData(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Whether this error means the histogram has no computed bins yet
    pub fn is_not_calculated(&self) -> bool {
        matches!(self, Self::NotCalculated)
    }
}
