//! Person directory - validation, uniqueness and CRUD over a `PersonRepository`.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{DirectorySummary, Person, PersonInput, ValidationError};
use crate::ports::{CoreError, PersonRepository};

/// The owning service for person records.
///
/// Every mutation goes through here. Adapters receive a directory instance
/// at their composition root and never touch the repository directly.
///
/// Creates, updates and deletes are serialized through a single write gate,
/// so the uniqueness check and the write it guards cannot interleave with
/// another writer in this process. Stores that enforce name uniqueness
/// themselves (such as the `SQLite` repository) close the gap across processes.
pub struct PersonDirectory {
    repo: Arc<dyn PersonRepository>,
    write_gate: Mutex<()>,
}

impl PersonDirectory {
    /// Create a directory over the given repository.
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self {
            repo,
            write_gate: Mutex::new(()),
        }
    }

    /// List all persons in store order.
    pub async fn list(&self) -> Result<Vec<Person>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Get a person by id.
    pub async fn get(&self, id: &str) -> Result<Person, CoreError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Validate and store a new person.
    ///
    /// Fails with `name missing`, `number missing` or `name must be unique`
    /// before anything is written.
    pub async fn add(&self, input: PersonInput) -> Result<Person, CoreError> {
        let candidate = input.validate()?;

        let _writer = self.write_gate.lock().await;
        self.ensure_name_free(candidate.name(), None).await?;
        let person = self.repo.insert(&candidate).await?;

        debug!(id = %person.id, name = %person.name, "Added person");
        Ok(person)
    }

    /// Replace name and number of an existing person, keeping its id.
    ///
    /// Uses the same validation as [`add`](Self::add). Renaming a person to
    /// its current name is allowed; taking another person's name is not.
    pub async fn update(&self, id: &str, input: PersonInput) -> Result<Person, CoreError> {
        let candidate = input.validate()?;

        let _writer = self.write_gate.lock().await;
        let existing = self.repo.get_by_id(id).await?;
        self.ensure_name_free(candidate.name(), Some(existing.id.as_str()))
            .await?;

        let updated = candidate.with_id(existing.id);
        self.repo.update(&updated).await?;

        debug!(id = %updated.id, "Updated person");
        Ok(updated)
    }

    /// Delete a person.
    ///
    /// Deleting an unknown id fails with `NotFound`, matching `get` and `update`.
    pub async fn remove(&self, id: &str) -> Result<(), CoreError> {
        let _writer = self.write_gate.lock().await;
        self.repo.delete(id).await?;

        debug!(id, "Removed person");
        Ok(())
    }

    /// Number of stored persons.
    pub async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.repo.count().await?)
    }

    /// Person count stamped with the current time.
    pub async fn summary(&self) -> Result<DirectorySummary, CoreError> {
        Ok(DirectorySummary {
            count: self.count().await?,
            generated_at: Utc::now(),
        })
    }

    async fn ensure_name_free(&self, name: &str, owner: Option<&str>) -> Result<(), CoreError> {
        match self.repo.find_by_name(name).await? {
            Some(holder) if owner != Some(holder.id.as_str()) => {
                Err(ValidationError::NameNotUnique.into())
            }
            _ => Ok(()),
        }
    }
}
