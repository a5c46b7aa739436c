//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` to HTTP status codes and JSON bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use phonebook_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// Request body over the accepted size.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    /// Status code this error is answered with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        if matches!(err, CoreError::Storage(_)) {
            tracing::error!(target: "phonebook.http", kind = err.kind(), message = %err, "Request failed");
        } else {
            tracing::warn!(target: "phonebook.http", kind = err.kind(), message = %err, "Request rejected");
        }

        let message = err.to_string();
        match err {
            CoreError::NotFound(_) => Self::NotFound(message),
            CoreError::Validation(_) | CoreError::MalformedId(_) => Self::BadRequest(message),
            CoreError::Storage(_) => Self::Internal(message),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(target: "phonebook.http", message = %rejection.body_text(), "Unreadable request body");
        Self::BadRequest(rejection.body_text())
    }
}
