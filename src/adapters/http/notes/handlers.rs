//! HTTP handlers for the notes endpoint.
//!
//! Each handler delegates straight to the [`NoteStore`] port. Client input
//! is fully validated before the store is touched.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::foundation::DomainError;
use crate::domain::note::{Note, NoteError};
use crate::ports::NoteStore;

use super::dto::{ErrorResponse, NoteQuery, ReadSelector};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the notes endpoint.
///
/// Holds nothing but the store; cloned per request.
#[derive(Clone)]
pub struct NoteAppState {
    pub store: Arc<dyn NoteStore>,
}

impl NoteAppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /notes - One note by `id`, an owner's notes by `ownerId`, or all notes
pub async fn get_notes(
    State(state): State<NoteAppState>,
    query: Result<Query<NoteQuery>, QueryRejection>,
) -> Result<Response, NoteApiError> {
    let Query(query) = query.map_err(NoteError::malformed_query)?;
    let response = match query.selector()? {
        ReadSelector::One(id) => {
            let note = state
                .store
                .get_one(id)
                .await?
                .ok_or(NoteError::NotFound(id))?;
            Json(note).into_response()
        }
        ReadSelector::ByOwner(owner_id) => {
            Json(state.store.get_all_for_owner(owner_id).await?).into_response()
        }
        ReadSelector::All => Json(state.store.get_all().await?).into_response(),
    };

    Ok(response)
}

/// POST /notes - Create a note; responds with the stored note and its new id
pub async fn create_note(
    State(state): State<NoteAppState>,
    body: Bytes,
) -> Result<Json<Note>, NoteApiError> {
    let note = parse_note(&body)?;

    let created = state.store.create(note).await?;
    if let Some(id) = created.id() {
        tracing::debug!(note_id = %id, owner_id = %created.owner_id(), "Note created");
    }

    Ok(Json(created))
}

/// PUT /notes - Replace the note whose id is given in the body
pub async fn update_note(
    State(state): State<NoteAppState>,
    body: Bytes,
) -> Result<StatusCode, NoteApiError> {
    let note = parse_note(&body)?;
    let id = note.require_id()?;

    state.store.update(note).await?;
    tracing::debug!(note_id = %id, "Note updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /notes?id= - Remove a note
pub async fn delete_note(
    State(state): State<NoteAppState>,
    query: Result<Query<NoteQuery>, QueryRejection>,
) -> Result<StatusCode, NoteApiError> {
    let Query(query) = query.map_err(NoteError::malformed_query)?;
    let id = query.required_id()?;

    state.store.delete(id).await?;
    tracing::debug!(note_id = %id, "Note deleted");

    Ok(StatusCode::OK)
}

fn parse_note(body: &[u8]) -> Result<Note, NoteError> {
    serde_json::from_slice(body).map_err(NoteError::malformed_body)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts note errors to HTTP responses.
///
/// Client errors and misses carry no body; store failures get an
/// [`ErrorResponse`].
#[derive(Debug)]
pub struct NoteApiError(NoteError);

impl NoteApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            NoteError::MissingParameter(_)
            | NoteError::MalformedQuery(_)
            | NoteError::InvalidIdentifier(_)
            | NoteError::MalformedBody(_)
            | NoteError::MissingId => StatusCode::BAD_REQUEST,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NoteError> for NoteApiError {
    fn from(err: NoteError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for NoteApiError {
    fn from(err: DomainError) -> Self {
        Self(NoteError::Store(err))
    }
}

impl IntoResponse for NoteApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            client_error if client_error.is_client_error() => {
                tracing::warn!(code = %client_error.code(), "Rejected note request: {}", client_error);
                status.into_response()
            }
            NoteError::Store(err) => {
                tracing::error!(
                    code = %err.code,
                    details = ?err.details,
                    "Note store failure: {}",
                    err.message
                );
                let body = ErrorResponse::internal("Note store failure");
                (status, Json(body)).into_response()
            }
            _ => status.into_response(),
        }
    }
}
