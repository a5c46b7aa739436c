//! Row mapping helpers shared by the `SQLite` repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use phonebook_core::{Person, RepositoryError};

/// Columns selected whenever a full person row is read.
pub const PERSON_SELECT_COLUMNS: &str = "id, name, number";

/// Convert a `persons` row into a domain `Person`.
pub fn row_to_person(row: &SqliteRow) -> Result<Person, RepositoryError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let number: String = row
        .try_get("number")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Person {
        id: id.to_string(),
        name,
        number,
    })
}

/// Parse a person id into the integer key used by the `persons` table.
pub fn parse_person_id(id: &str) -> Result<i64, RepositoryError> {
    id.parse()
        .map_err(|_| RepositoryError::MalformedId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_person_id() {
        assert_eq!(parse_person_id("42").unwrap(), 42);
        assert!(matches!(
            parse_person_id("5c41c90e84d891c15dfa3431"),
            Err(RepositoryError::MalformedId(_))
        ));
        assert!(matches!(
            parse_person_id(""),
            Err(RepositoryError::MalformedId(_))
        ));
    }
}
