//! Axum router configuration for the notes endpoint.

use axum::{routing::get, Router};

use super::handlers::{create_note, delete_note, get_notes, update_note, NoteAppState};

/// Create the notes router.
///
/// # Routes
///
/// - `GET /notes` - `?id=` one note, `?ownerId=` an owner's notes, else all
/// - `POST /notes` - Create a note
/// - `PUT /notes` - Replace a note (id in body)
/// - `DELETE /notes?id=` - Delete a note
pub fn note_routes() -> Router<NoteAppState> {
    Router::new().route(
        "/notes",
        get(get_notes)
            .post(create_note)
            .put(update_note)
            .delete(delete_note),
    )
}
