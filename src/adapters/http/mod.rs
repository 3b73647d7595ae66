//! HTTP adapters - REST API implementations.
//!
//! - `notes` - The `/notes` endpoint
//! - `app` - Router assembly and transport layers

pub mod app;
pub mod notes;

// Re-export key types for convenience
pub use app::{build_app, router};
pub use notes::{note_routes, NoteAppState};
