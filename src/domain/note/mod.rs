//! Note domain module.
//!
//! A note is a small JSON document owned by a single principal. The id is
//! assigned by the store on creation and never changes afterwards.

mod errors;
#[allow(clippy::module_inception)]
mod note;

pub use errors::NoteError;
pub use note::Note;
