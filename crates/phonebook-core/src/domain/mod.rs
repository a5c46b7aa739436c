//! Domain types for the phonebook.
//!
//! These types are independent of any infrastructure concerns
//! (HTTP, database, etc.).

mod person;

pub use person::{DirectorySummary, NewPerson, Person, PersonInput, ValidationError};
