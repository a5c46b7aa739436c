//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `axum` types in any signature
//! - Repository traits are minimal and CRUD-focused

pub mod person_repository;

use thiserror::Error;

use crate::domain::ValidationError;

pub use person_repository::PersonRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity violating a uniqueness constraint already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The identifier is not in the format the store uses.
    #[error("Malformed id: {0}")]
    MalformedId(String),

    /// Storage backend error (database, lock poisoning, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type returned by `PersonDirectory`.
/// Adapters map it to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The candidate person was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No person with the given id exists.
    #[error("{0} not found")]
    NotFound(String),

    /// The id cannot name any person in the current store.
    #[error("malformatted id")]
    MalformedId(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Stable name of the error category, used in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::NotFound(_) => "NotFoundError",
            Self::MalformedId(_) => "CastError",
            Self::Storage(_) => "StorageError",
        }
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::NotFound(what),
            // Name is the only uniqueness constraint a person store carries.
            RepositoryError::AlreadyExists(_) => Self::Validation(ValidationError::NameNotUnique),
            RepositoryError::MalformedId(id) => Self::MalformedId(id),
            RepositoryError::Storage(msg) => Self::Storage(msg),
        }
    }
}
