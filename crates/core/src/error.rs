//! Domain error model.

use thiserror::Error;

use crate::field::FieldErrors;
use crate::id::PersonId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (HTTP status codes, rendering) belong to the callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more form fields failed their rule.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced person does not exist.
    #[error("person {0} not found")]
    NotFound(PersonId),
}

impl DomainError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: PersonId) -> Self {
        Self::NotFound(id)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
