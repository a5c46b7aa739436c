//! In-memory implementation of the `PersonRepository` trait.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use phonebook_core::{NewPerson, Person, PersonRepository, RepositoryError};

/// Volatile person store.
///
/// Persons are kept in insertion order. New ids are one above the highest
/// id this store has ever issued, so deleting the newest person does not
/// free its id for the next insert.
pub struct InMemoryPersonRepository {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    persons: Vec<Person>,
    high_water: u64,
}

impl MemoryState {
    fn next_id(&mut self) -> Result<String, RepositoryError> {
        self.high_water = self
            .high_water
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("person id space exhausted".to_string()))?;
        Ok(self.high_water.to_string())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.persons.iter().position(|p| p.id == id)
    }
}

impl InMemoryPersonRepository {
    /// Create an empty store. The first insert receives id `"1"`.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .read()
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .write()
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.read()?.persons.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError> {
        let state = self.read()?;
        state
            .position(id)
            .map(|i| state.persons[i].clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("Person with ID {id}")))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, RepositoryError> {
        Ok(self
            .read()?
            .persons
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, RepositoryError> {
        let mut state = self.write()?;
        let id = state.next_id()?;
        let created = person.clone().with_id(id);
        state.persons.push(created.clone());
        Ok(created)
    }

    async fn update(&self, person: &Person) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let index = state
            .position(&person.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Person with ID {}", person.id)))?;
        state.persons[index].clone_from(person);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let index = state
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Person with ID {id}")))?;
        state.persons.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.persons.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::PersonInput;

    fn new_person(name: &str, number: &str) -> NewPerson {
        PersonInput::new(name, number).validate().unwrap()
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repo = InMemoryPersonRepository::new();
        let first = repo.insert(&new_person("A", "1")).await.unwrap();
        let second = repo.insert(&new_person("B", "2")).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[tokio::test]
    async fn test_exhausted_id_space_is_a_storage_error() {
        let repo = InMemoryPersonRepository::new();
        repo.write().unwrap().high_water = u64::MAX;

        let result = repo.insert(&new_person("Ada Lovelace", "39-44-5323523")).await;
        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_deleted_maximum_is_not_reused() {
        let repo = InMemoryPersonRepository::new();
        repo.insert(&new_person("A", "1")).await.unwrap();
        let second = repo.insert(&new_person("B", "2")).await.unwrap();
        repo.delete(&second.id).await.unwrap();

        let third = repo.insert(&new_person("C", "3")).await.unwrap();
        assert_eq!(third.id, "3");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryPersonRepository::new();
        for name in ["Mary", "Arto", "Dan"] {
            repo.insert(&new_person(name, "0")).await.unwrap();
        }
        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Mary", "Arto", "Dan"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_are_not_found() {
        let repo = InMemoryPersonRepository::new();
        let ghost = new_person("Ghost", "0").with_id("7");
        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete("7").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
