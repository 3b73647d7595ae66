//! In-memory adapters.

mod in_memory_note_store;

pub use in_memory_note_store::InMemoryNoteStore;
