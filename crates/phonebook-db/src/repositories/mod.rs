//! Repository implementations.
//!
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod memory_person_repository;
mod row_mappers;
mod sqlite_person_repository;

pub use memory_person_repository::InMemoryPersonRepository;
pub use sqlite_person_repository::SqlitePersonRepository;
