//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! configured database URL.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Parses the `sqlite:` connection URL
/// 2. Creates the database file if it doesn't exist
/// 3. Creates the `persons` table and its indexes
///
/// # Example
///
/// ```rust,no_run
/// use phonebook_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite://phonebook.db").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("invalid database URL: {db_url}"))?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("failed to open database: {db_url}"))?;

    create_schema(&pool).await?;

    tracing::debug!(target: "phonebook.db", "Database schema ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is limited to one connection: every `:memory:` connection is a
/// separate database.
#[cfg(test)]
pub(crate) async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT keeps deleted ids from being handed out again
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS persons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(name) > 0),
            number TEXT NOT NULL CHECK (length(number) > 0)
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
