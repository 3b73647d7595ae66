//! Note-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, NoteId, ValidationError};

/// Errors raised while serving note requests.
///
/// The first five variants are client input problems and never reach the
/// store.
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    /// A required query parameter was absent.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The query string could not be read (for example a repeated key).
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    /// An identifier parameter could not be parsed.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    /// The request body was not a valid note document.
    #[error("Malformed note body: {0}")]
    MalformedBody(String),

    /// A note submitted for update carried no id.
    #[error("Note must carry an id")]
    MissingId,

    /// No note exists with the requested id.
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    /// The store failed.
    #[error("{0}")]
    Store(#[from] DomainError),
}

impl NoteError {
    pub fn malformed_body(reason: impl std::fmt::Display) -> Self {
        NoteError::MalformedBody(reason.to_string())
    }

    pub fn malformed_query(reason: impl std::fmt::Display) -> Self {
        NoteError::MalformedQuery(reason.to_string())
    }

    /// True for errors caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NoteError::MissingParameter(_)
                | NoteError::MalformedQuery(_)
                | NoteError::InvalidIdentifier(_)
                | NoteError::MalformedBody(_)
                | NoteError::MissingId
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NoteError::MissingParameter(_) | NoteError::MissingId => ErrorCode::ValidationFailed,
            NoteError::MalformedQuery(_)
            | NoteError::InvalidIdentifier(_)
            | NoteError::MalformedBody(_) => ErrorCode::InvalidFormat,
            NoteError::NotFound(_) => ErrorCode::NoteNotFound,
            NoteError::Store(err) => err.code,
        }
    }
}
