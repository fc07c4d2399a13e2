//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    /// A field refers to an entity that does not exist.
    #[error("{0}")]
    InvalidReference(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Document could not be decoded: {0}")]
    Serialization(String),
}
