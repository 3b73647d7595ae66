//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresNoteStore` - Notes table with a JSONB column for free-form fields
//! - `connect_pool` - Pool construction and optional migrations

mod note_store;
mod pool;

pub use note_store::PostgresNoteStore;
pub use pool::connect_pool;
