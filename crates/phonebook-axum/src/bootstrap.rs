//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The person store is chosen and instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use phonebook_core::{CoreError, PersonDirectory, PersonInput, PersonRepository, ValidationError};
use phonebook_db::{StoreFactory, setup_database};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3001;

/// Persons loaded by `--seed`.
const SAMPLE_PERSONS: [(&str, &str); 4] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-44-5323523"),
    ("Dan Abramov", "12-43-234345"),
    ("Mary Poppendieck", "39-23-6423122"),
];

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Where persons are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageConfig {
    /// Volatile store, emptied on restart.
    #[default]
    Memory,
    /// `SQLite` database behind a `sqlite:` URL.
    Sqlite { url: String },
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Backing store for persons.
    pub storage: StorageConfig,
    /// Load the sample persons at startup.
    pub seed: bool,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// In-memory store on the default port, no seeding, no static assets.
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            storage: StorageConfig::Memory,
            seed: false,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Use a `SQLite` database instead of the in-memory store.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.storage = StorageConfig::Sqlite { url: url.into() };
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services API handlers need.
pub struct AxumContext {
    /// The person directory every handler delegates to.
    pub directory: Arc<PersonDirectory>,
}

/// Bootstrap the server: open the configured store and build the directory.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let repo: Arc<dyn PersonRepository> = match &config.storage {
        StorageConfig::Memory => {
            tracing::info!(target: "phonebook.bootstrap", "Using in-memory person store");
            StoreFactory::memory_repository()
        }
        StorageConfig::Sqlite { url } => {
            tracing::info!(target: "phonebook.bootstrap", database_url = %url, "Using SQLite person store");
            let pool = setup_database(url).await?;
            StoreFactory::sqlite_repository(pool)
        }
    };

    let directory = Arc::new(StoreFactory::build_directory(repo));

    if config.seed {
        let added = seed_directory(&directory).await?;
        tracing::info!(target: "phonebook.bootstrap", added, "Seeded sample persons");
    }

    Ok(AxumContext { directory })
}

/// Add the sample persons, skipping names that are already present.
///
/// Returns how many persons were added.
pub async fn seed_directory(directory: &PersonDirectory) -> Result<usize, CoreError> {
    let mut added = 0;
    for (name, number) in SAMPLE_PERSONS {
        match directory.add(PersonInput::new(name, number)).await {
            Ok(_) => added += 1,
            Err(CoreError::Validation(ValidationError::NameNotUnique)) => {
                tracing::debug!(target: "phonebook.bootstrap", name, "Sample person already present");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(added)
}

/// Start the web server and run until Ctrl+C.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let ctx = bootstrap(&ServerConfig {
            seed: true,
            ..ServerConfig::with_defaults()
        })
        .await
        .unwrap();

        let persons = ctx.directory.list().await.unwrap();
        assert_eq!(persons.len(), 4);
        assert_eq!(persons[0].id, "1");
        assert_eq!(persons[1].name, "Ada Lovelace");

        assert_eq!(seed_directory(&ctx.directory).await.unwrap(), 0);
        assert_eq!(ctx.directory.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_bootstrap_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("phonebook.db").display());
        let config = ServerConfig::with_defaults().with_database_url(url);

        let ctx = bootstrap(&config).await.unwrap();
        assert_eq!(ctx.directory.count().await.unwrap(), 0);
    }

    #[test]
    fn test_builder_methods() {
        let config = ServerConfig::with_defaults()
            .with_static_dir("./dist")
            .with_allowed_origins(vec!["http://localhost:5173".into()]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.static_dir, Some(PathBuf::from("./dist")));
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));
    }
}
