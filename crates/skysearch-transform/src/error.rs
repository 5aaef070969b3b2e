//! Error types for the decode-and-transform entry points
//!
//! The transforms themselves are infallible; only turning raw JSON into a
//! record can fail.

use thiserror::Error;

/// Errors that can occur before a record reaches a transform
#[derive(Error, Debug)]
pub enum TransformError {
    /// Raw record is not valid JSON or does not match the record shape
    #[error("Record decode error: {0}")]
    Decode(String),

    /// Raw record exceeds the configured size limit
    #[error("Record too large: {0} bytes (max: {1})")]
    RecordTooLarge(usize, usize),

    /// Record declares a different lexicon type
    #[error("Unexpected record type: expected '{expected}', found '{found}'")]
    UnexpectedType {
        /// Type the caller asked for
        expected: &'static str,
        /// Type declared in the record
        found: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TransformError {
    fn from(e: serde_json::Error) -> Self {
        TransformError::Decode(e.to_string())
    }
}
