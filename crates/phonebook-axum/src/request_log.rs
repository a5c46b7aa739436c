//! Request logging middleware.
//!
//! Emits one line per request in the form
//! `METHOD URI STATUS - ELAPSED ms - BODY`, where BODY is the compacted
//! JSON body of POST requests and empty otherwise.

use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;

/// Largest POST body buffered for logging. Same as the default limit of
/// axum's `Json` extractor, so every body a handler would accept gets through.
const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Log method, URI, status, latency and POST body of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let (response, post_data) = if method == Method::POST {
        match buffer_body(request).await {
            Ok((request, logged)) => (next.run(request).await, logged),
            Err(err) => (err.into_response(), String::new()),
        }
    } else {
        (next.run(request).await, String::new())
    };

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        target: "phonebook.http",
        "{} {} {} - {:.3} ms - {}",
        method,
        uri,
        response.status().as_u16(),
        elapsed_ms,
        post_data
    );

    response
}

/// Read the body so it can be logged, then put it back for the handler.
async fn buffer_body(request: Request) -> Result<(Request, String), HttpError> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_LOGGED_BODY_BYTES)
        .await
        .map_err(|err| {
            tracing::warn!(target: "phonebook.http", error = %err, "Unreadable request body");
            HttpError::PayloadTooLarge(format!(
                "request body larger than {MAX_LOGGED_BODY_BYTES} bytes"
            ))
        })?;

    let logged = describe_body(&bytes);
    Ok((Request::from_parts(parts, Body::from(bytes)), logged))
}

/// Compact JSON when the body parses, raw text otherwise.
fn describe_body(bytes: &Bytes) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes).map_or_else(
        |_| String::from_utf8_lossy(bytes).into_owned(),
        |value| value.to_string(),
    )
}
