//! Command line and environment configuration for the `phonebook` binary.
//!
//! Every flag can also be given through the environment, so
//! `PORT=8080 phonebook` and `phonebook --port 8080` are equivalent.

use std::path::PathBuf;

use clap::Parser;

use crate::bootstrap::{CorsConfig, DEFAULT_PORT, ServerConfig, StorageConfig};

/// Phonebook REST API server.
#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(about = "Serve the phonebook REST API")]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// `SQLite` database URL (e.g. sqlite://phonebook.db). Persons are kept in memory when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Add the sample persons at startup (accepts true/false, 1/0, yes/no, on/off)
    #[arg(
        long,
        env = "PHONEBOOK_SEED",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub seed: bool,

    /// Directory of built frontend assets to serve with SPA fallback
    #[arg(long, env = "PHONEBOOK_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable). All origins are allowed when omitted
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Convert parsed arguments into the server configuration.
    pub fn into_config(self) -> ServerConfig {
        let storage = self
            .database_url
            .map_or(StorageConfig::Memory, |url| StorageConfig::Sqlite { url });
        let cors = if self.allowed_origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(self.allowed_origins)
        };

        ServerConfig {
            host: self.host,
            port: self.port,
            storage,
            seed: self.seed,
            static_dir: self.static_dir,
            cors,
        }
    }
}
