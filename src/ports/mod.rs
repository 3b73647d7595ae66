//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NoteStore` - Persistence of notes, keyed by id and indexed by owner

mod note_store;

pub use note_store::NoteStore;
