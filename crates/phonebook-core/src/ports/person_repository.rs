//! Person repository trait definition.
//!
//! This port defines the interface for person persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPerson, Person};

/// Repository for person persistence operations.
///
/// # Design Rules
///
/// - CRUD-only: list, get, find, insert, update, delete, count
/// - Validation and uniqueness checks belong in `PersonDirectory`, not here
/// - The store, not the caller, assigns ids on insert
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List all persons in store order.
    async fn list(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Get a person by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the person doesn't exist and
    /// `Err(RepositoryError::MalformedId)` if the id can't belong to this store.
    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError>;

    /// Find a person whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, RepositoryError>;

    /// Insert a new person and return it with its assigned id.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the store enforces
    /// name uniqueness itself and the name is taken.
    async fn insert(&self, person: &NewPerson) -> Result<Person, RepositoryError>;

    /// Replace name and number of an existing person.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the person doesn't exist.
    async fn update(&self, person: &Person) -> Result<(), RepositoryError>;

    /// Delete a person by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the person doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Number of stored persons.
    async fn count(&self) -> Result<usize, RepositoryError>;
}
