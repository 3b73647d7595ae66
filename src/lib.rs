//! Notes Service - HTTP CRUD for owner-scoped notes
//!
//! A single `/notes` resource served by axum over a pluggable
//! [`NoteStore`](ports::NoteStore): in-memory by default, PostgreSQL when
//! configured.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
