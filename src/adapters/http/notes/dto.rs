//! HTTP DTOs for the notes endpoint.
//!
//! The note itself travels as [`Note`](crate::domain::note::Note); these
//! types cover query parameters and the non-note response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NoteId, OwnerId};
use crate::domain::note::NoteError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters accepted on `/notes`.
///
/// Values are kept as raw strings so a non-numeric id surfaces as a
/// [`NoteError::InvalidIdentifier`] rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Which notes a GET request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSelector {
    One(NoteId),
    ByOwner(OwnerId),
    All,
}

impl NoteQuery {
    /// Resolves the read mode. `id` wins over `ownerId`.
    pub fn selector(&self) -> Result<ReadSelector, NoteError> {
        if let Some(id) = &self.id {
            return Ok(ReadSelector::One(id.parse()?));
        }
        if let Some(owner_id) = &self.owner_id {
            return Ok(ReadSelector::ByOwner(owner_id.parse()?));
        }
        Ok(ReadSelector::All)
    }

    /// The `id` parameter, which DELETE requires.
    pub fn required_id(&self) -> Result<NoteId, NoteError> {
        let id = self
            .id
            .as_deref()
            .ok_or(NoteError::MissingParameter("id"))?;
        Ok(id.parse()?)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Standard error response, used for server-side failures.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
