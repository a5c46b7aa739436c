//! Person domain types and field validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Person Types
// ─────────────────────────────────────────────────────────────────────────────

/// A person stored in the directory.
///
/// The `id` is assigned by the store when the person is created and never
/// changes afterwards. Use `NewPerson` for persons that haven't been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Display name, unique across the directory (case-sensitive).
    pub name: String,
    /// Phone number as entered by the user.
    pub number: String,
}

/// A validated person that has not been stored yet.
///
/// The only way to obtain one is through [`PersonInput::validate`], so both
/// fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    name: String,
    number: String,
}

impl NewPerson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Attach a store-assigned id, producing a stored `Person`.
    pub fn with_id(self, id: impl Into<String>) -> Person {
        Person {
            id: id.into(),
            name: self.name,
            number: self.number,
        }
    }
}

/// Raw person fields as decoded from a request body.
///
/// Both fields are optional so that a missing field surfaces as a
/// validation error instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl PersonInput {
    /// Build an input with both fields present.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Check required fields, shared by create and update.
    ///
    /// The name is checked before the number, so an input missing both
    /// reports the name.
    pub fn validate(self) -> Result<NewPerson, ValidationError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::NameMissing)?;
        let number = self
            .number
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::NumberMissing)?;
        Ok(NewPerson { name, number })
    }
}

/// Reasons a person candidate is rejected.
///
/// The display strings are part of the HTTP contract and are returned
/// verbatim in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name missing")]
    NameMissing,

    #[error("number missing")]
    NumberMissing,

    #[error("name must be unique")]
    NameNotUnique,
}

/// Snapshot of the directory used by informational pages.
#[derive(Debug, Clone)]
pub struct DirectorySummary {
    /// Number of stored persons.
    pub count: usize,
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
}
