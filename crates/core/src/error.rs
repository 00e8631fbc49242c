//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local to a single request: returning one of these never
/// leaves the catalog in a partially-updated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (missing required field, out-of-range value).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The input could not be parsed into fields at all.
    ///
    /// Reported to clients the same way as a validation failure, but raised
    /// before any field-level check runs.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
