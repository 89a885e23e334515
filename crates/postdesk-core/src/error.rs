//! Domain-level error types.

use thiserror::Error;

use crate::domain::RecordId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A field failed a business rule. `message` is the client-facing text,
    /// e.g. "title is required".
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("{entity_type} not found (id {id})")]
    NotFound {
        entity_type: &'static str,
        id: RecordId,
    },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// Opaque passthrough of a storage failure.
    #[error(transparent)]
    Store(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// `"<field> is required"`, raised when a full input omits a field.
    pub fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("{field} is required"),
        }
    }

    /// `"<field> cannot be empty"`, raised when a change-set blanks a field.
    pub fn empty(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("{field} cannot be empty"),
        }
    }

    pub fn invalid(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("{field} is invalid"),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
