//! Domain-level errors.
//!
//! These errors represent business rule violations and credential failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::validation::ValidationError;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A validation rule rejected the entity
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The hashing primitive failed (internal condition)
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Plaintext does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl DomainError {
    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
