//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum endpoint and router
//! - `memory` - In-process note store
//! - `postgres` - PostgreSQL note store

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryNoteStore;
pub use postgres::PostgresNoteStore;
