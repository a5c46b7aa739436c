#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod request_log;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, StorageConfig, bootstrap, start_server};
pub use config::Cli;
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
