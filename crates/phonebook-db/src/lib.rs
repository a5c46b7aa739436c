#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::{InMemoryPersonRepository, SqlitePersonRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;

// Linked only for its bundled SQLite build
use libsqlite3_sys as _;
