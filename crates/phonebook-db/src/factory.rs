//! Composition utilities for building a `PersonDirectory` over either store.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use phonebook_core::{PersonDirectory, PersonRepository};

use crate::repositories::{InMemoryPersonRepository, SqlitePersonRepository};

/// Factory for creating person stores and directories.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a `SQLite` person repository from a pool.
    pub fn sqlite_repository(pool: SqlitePool) -> Arc<SqlitePersonRepository> {
        Arc::new(SqlitePersonRepository::new(pool))
    }

    /// Create an empty in-memory person repository.
    pub fn memory_repository() -> Arc<InMemoryPersonRepository> {
        Arc::new(InMemoryPersonRepository::new())
    }

    /// Build a directory over any repository.
    pub fn build_directory(repo: Arc<dyn PersonRepository>) -> PersonDirectory {
        PersonDirectory::new(repo)
    }

    /// Build a directory backed by `SQLite`.
    ///
    /// # Arguments
    ///
    /// * `pool` - `SQLite` connection pool from `setup_database()`
    pub fn sqlite_directory(pool: SqlitePool) -> PersonDirectory {
        Self::build_directory(Self::sqlite_repository(pool))
    }

    /// Build a directory backed by an empty in-memory store.
    pub fn memory_directory() -> PersonDirectory {
        Self::build_directory(Self::memory_repository())
    }
}
