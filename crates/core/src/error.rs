//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on. None of them
/// leaves the inventory in a partially mutated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed date).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A positional lookup fell outside the held sequence.
    #[error("invalid index {index} (inventory holds {len} items)")]
    InvalidIndex { index: usize, len: usize },

    /// No held lot matched the requested code.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
