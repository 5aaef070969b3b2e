//! Domain error types

use thiserror::Error;

/// Errors raised when constructing domain values from untrusted input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is not a well-formed DID
    #[error("Invalid DID '{0}': {1}")]
    InvalidDid(String, &'static str),
}
