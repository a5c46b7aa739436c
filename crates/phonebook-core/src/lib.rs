#![doc = include_str!("../README.md")]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DirectorySummary, NewPerson, Person, PersonInput, ValidationError};
pub use ports::{CoreError, PersonRepository, RepositoryError};
pub use services::PersonDirectory;
