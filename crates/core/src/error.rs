//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The reporting operations in this workspace are total functions over
/// well-formed input (empty collections and zero totals are defined results,
/// not faults). The variants below are the only failures the domain raises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-positive trailing-day count).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A capability check failed at a view boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
