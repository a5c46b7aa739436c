//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `PersonDirectory`.

pub mod pages;
pub mod persons;
