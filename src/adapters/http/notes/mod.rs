//! HTTP adapter for the notes endpoint.
//!
//! Exposes the note store via REST on a single path:
//! - `GET /notes` - Read by `id`, by `ownerId`, or everything
//! - `POST /notes` - Create a note
//! - `PUT /notes` - Replace a note
//! - `DELETE /notes?id=` - Delete a note

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, NoteQuery, ReadSelector};
pub use handlers::{NoteApiError, NoteAppState};
pub use routes::note_routes;
