//! Behaviour every person store must share when driven through `PersonDirectory`.
//!
//! Each scenario runs once against the in-memory store and once against a
//! file-backed `SQLite` database.

use phonebook_core::{CoreError, PersonDirectory, PersonInput, ValidationError};
use phonebook_db::{StoreFactory, setup_database};
use tempfile::TempDir;

async fn sqlite_directory() -> (PersonDirectory, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("phonebook.db").display());
    let pool = setup_database(&url).await.unwrap();
    (StoreFactory::sqlite_directory(pool), dir)
}

async fn ada_scenario(directory: &PersonDirectory) {
    let ada = directory
        .add(PersonInput::new("Ada Lovelace", "39-44-5323523"))
        .await
        .unwrap();
    assert_eq!(ada.id, "1");

    let err = directory
        .add(PersonInput::new("Ada Lovelace", "39-44-5323523"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "name must be unique");
    assert_eq!(directory.list().await.unwrap().len(), 1);

    directory.remove("1").await.unwrap();
    assert!(directory.list().await.unwrap().is_empty());
    assert!(matches!(
        directory.get("1").await,
        Err(CoreError::NotFound(_))
    ));
}

async fn update_scenario(directory: &PersonDirectory) {
    let arto = directory
        .add(PersonInput::new("Arto Hellas", "040-123456"))
        .await
        .unwrap();
    let dan = directory
        .add(PersonInput::new("Dan Abramov", "12-43-234345"))
        .await
        .unwrap();

    let updated = directory
        .update(&arto.id, PersonInput::new("Arto Hellas", "040-999999"))
        .await
        .unwrap();
    assert_eq!(updated.id, arto.id);
    assert_eq!(updated.number, "040-999999");

    let err = directory
        .update(&dan.id, PersonInput::new("Arto Hellas", "1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::NameNotUnique)
    ));
    assert_eq!(directory.get(&dan.id).await.unwrap(), dan);

    let listed = directory.list().await.unwrap();
    assert_eq!(listed, vec![updated, dan]);
}

async fn fresh_ids_scenario(directory: &PersonDirectory) {
    let mut seen = Vec::new();
    for (i, name) in ["A", "B", "C"].into_iter().enumerate() {
        let person = directory
            .add(PersonInput::new(name, i.to_string()))
            .await
            .unwrap();
        assert!(!seen.contains(&person.id));
        seen.push(person.id);
    }

    let last = seen.pop().unwrap();
    directory.remove(&last).await.unwrap();
    let next = directory.add(PersonInput::new("D", "3")).await.unwrap();
    assert_ne!(next.id, last);
    assert_eq!(directory.count().await.unwrap(), 3);
}

#[tokio::test]
async fn memory_store_ada_scenario() {
    ada_scenario(&StoreFactory::memory_directory()).await;
}

#[tokio::test]
async fn sqlite_store_ada_scenario() {
    let (directory, _dir) = sqlite_directory().await;
    ada_scenario(&directory).await;
}

#[tokio::test]
async fn memory_store_update_scenario() {
    update_scenario(&StoreFactory::memory_directory()).await;
}

#[tokio::test]
async fn sqlite_store_update_scenario() {
    let (directory, _dir) = sqlite_directory().await;
    update_scenario(&directory).await;
}

#[tokio::test]
async fn memory_store_never_reuses_ids() {
    fresh_ids_scenario(&StoreFactory::memory_directory()).await;
}

#[tokio::test]
async fn sqlite_store_never_reuses_ids() {
    let (directory, _dir) = sqlite_directory().await;
    fresh_ids_scenario(&directory).await;
}

#[tokio::test]
async fn sqlite_rejects_malformed_ids() {
    let (directory, _dir) = sqlite_directory().await;
    let err = directory.get("5c41c90e84d891c15dfa3431").await.unwrap_err();
    assert_eq!(err.kind(), "CastError");
    assert_eq!(err.to_string(), "malformatted id");
}

#[tokio::test]
async fn concurrent_adds_of_one_name_store_it_once() {
    let directory = std::sync::Arc::new(StoreFactory::memory_directory());

    let mut handles = Vec::new();
    for i in 0..8 {
        let directory = directory.clone();
        handles.push(tokio::spawn(async move {
            directory
                .add(PersonInput::new("Mary Poppendieck", i.to_string()))
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }
    assert_eq!(created, 1);
    assert_eq!(directory.count().await.unwrap(), 1);
}
