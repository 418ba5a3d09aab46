//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the statistics engine.
///
/// Every aggregator call fails as a whole; there are no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Missing or malformed selector, or an empty record table
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The selector matched no records
    #[error("No data found: {0}")]
    NotFound(String),

    /// A record violates a field contract (mark, grade)
    #[error("Invalid record data: {0}")]
    InvalidData(String),
}

/// Errors that can occur while decoding uploaded rows
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
