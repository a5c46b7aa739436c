//! Person handlers - CRUD operations under `/api/persons`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::HttpError;
use crate::state::AppState;
use phonebook_core::{Person, PersonInput};

/// List all persons.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, HttpError> {
    Ok(Json(state.directory.list().await?))
}

/// Get a single person by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, HttpError> {
    Ok(Json(state.directory.get(&id).await?))
}

/// Create a person.
pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), HttpError> {
    let Json(input) = payload?;
    let person = state.directory.add(input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Replace name and number of an existing person.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, HttpError> {
    let Json(input) = payload?;
    Ok(Json(state.directory.update(&id, input).await?))
}

/// Delete a person.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state.directory.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
