//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `note` - The Note record and its error taxonomy

pub mod foundation;
pub mod note;
