//! `SQLite` implementation of the `PersonRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use phonebook_core::{NewPerson, Person, PersonRepository, RepositoryError};

use super::row_mappers::{PERSON_SELECT_COLUMNS, parse_person_id, row_to_person};

/// Map a write failure, recognising the `UNIQUE(name)` constraint.
fn map_write_error(err: sqlx::Error, name: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::AlreadyExists(format!("Person with name '{name}'"))
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// `SQLite` implementation of the `PersonRepository` trait.
///
/// This struct holds a connection pool and implements all CRUD operations
/// for persons using `SQLite`.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new `SQLite` person repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn list(&self) -> Result<Vec<Person>, RepositoryError> {
        let query = format!("SELECT {PERSON_SELECT_COLUMNS} FROM persons ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_person).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError> {
        let key = parse_person_id(id)?;
        let query = format!("SELECT {PERSON_SELECT_COLUMNS} FROM persons WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Person with ID {id}")))?;

        row_to_person(&row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, RepositoryError> {
        let query = format!("SELECT {PERSON_SELECT_COLUMNS} FROM persons WHERE name = ?");

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_person).transpose()
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, RepositoryError> {
        let result = sqlx::query("INSERT INTO persons (name, number) VALUES (?, ?)")
            .bind(person.name())
            .bind(person.number())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, person.name()))?;

        Ok(person.clone().with_id(result.last_insert_rowid().to_string()))
    }

    async fn update(&self, person: &Person) -> Result<(), RepositoryError> {
        let key = parse_person_id(&person.id)?;

        let result = sqlx::query("UPDATE persons SET name = ?, number = ? WHERE id = ?")
            .bind(&person.name)
            .bind(&person.number)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &person.name))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Person with ID {}",
                person.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let key = parse_person_id(id)?;

        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Person with ID {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        usize::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use phonebook_core::PersonInput;

    async fn repo() -> SqlitePersonRepository {
        SqlitePersonRepository::new(setup_test_database().await.unwrap())
    }

    fn new_person(name: &str, number: &str) -> NewPerson {
        PersonInput::new(name, number).validate().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;
        let ada = repo
            .insert(&new_person("Ada Lovelace", "39-44-5323523"))
            .await
            .unwrap();

        assert_eq!(ada.id, "1");
        assert_eq!(repo.get_by_id("1").await.unwrap(), ada);
        assert_eq!(
            repo.find_by_name("Ada Lovelace").await.unwrap(),
            Some(ada)
        );
        assert_eq!(repo.find_by_name("ada lovelace").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unique_name_constraint() {
        let repo = repo().await;
        repo.insert(&new_person("Dan Abramov", "1")).await.unwrap();

        let err = repo
            .insert(&new_person("Dan Abramov", "2"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_into_taken_name_is_rejected() {
        let repo = repo().await;
        repo.insert(&new_person("Dan Abramov", "1")).await.unwrap();
        let mary = repo.insert(&new_person("Mary Poppendieck", "2")).await.unwrap();

        let renamed = new_person("Dan Abramov", "2").with_id(mary.id);
        assert!(matches!(
            repo.update(&renamed).await,
            Err(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_ids() {
        let repo = repo().await;
        assert!(matches!(
            repo.get_by_id("not-a-number").await,
            Err(RepositoryError::MalformedId(_))
        ));
        assert!(matches!(
            repo.delete("not-a-number").await,
            Err(RepositoryError::MalformedId(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        repo.insert(&new_person("A", "1")).await.unwrap();
        let second = repo.insert(&new_person("B", "2")).await.unwrap();
        repo.delete(&second.id).await.unwrap();

        let third = repo.insert(&new_person("C", "3")).await.unwrap();
        assert_eq!(third.id, "3");
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.get_by_id("99").await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete("99").await,
            Err(RepositoryError::NotFound(_))
        ));
        let ghost = new_person("Ghost", "0").with_id("99");
        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
