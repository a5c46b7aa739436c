//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `PersonDirectory`.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::request_log::log_requests;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Unknown API paths answer with the JSON unknown-endpoint error even when
/// static assets are served at the top level.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/persons",
            get(handlers::persons::list).post(handlers::persons::add),
        )
        .route(
            "/persons/",
            get(handlers::persons::list).post(handlers::persons::add),
        )
        .route(
            "/persons/{id}",
            get(handlers::persons::get)
                .put(handlers::persons::update)
                .delete(handlers::persons::remove),
        )
        .fallback(handlers::pages::unknown_endpoint)
}

/// Routes shared by the API-only and SPA routers.
fn base_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(handlers::pages::info))
        .nest("/api", api_routes())
}

/// Create the main Axum router with all API routes.
///
/// Serves `/`, `/health`, `/info` and `/api/*`; any other path gets the
/// JSON unknown-endpoint error. For serving static assets use
/// [`create_spa_router`].
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    base_routes()
        .route("/", get(handlers::pages::root))
        .fallback(handlers::pages::unknown_endpoint)
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(middleware::from_fn(log_requests))
}

/// Create a router with API routes and static asset serving.
///
/// This creates a complete SPA-ready router that:
/// 1. Serves API routes under `/api/*`, `/info` and `/health`
/// 2. Serves static assets from `static_dir` for matching files
/// 3. Falls back to `index.html` for client-side routing (SPA mode)
///
/// # Example
/// ```ignore
/// let router = create_spa_router(ctx, "./dist", &CorsConfig::AllowAll);
/// ```
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let state: AppState = Arc::new(ctx);
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    // Using .fallback() on ServeDir makes it return index.html for missing files
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    base_routes()
        .fallback_service(serve_dir)
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(middleware::from_fn(log_requests))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
