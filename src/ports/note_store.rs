//! Note store port.
//!
//! Defines the contract for persisting and retrieving notes. The HTTP
//! endpoint depends only on this trait; adapters provide the storage.
//!
//! # Design
//!
//! - **Keyed by id**: the store owns id assignment
//! - **Owner index**: notes are also reachable by `OwnerId`
//! - **Natural order**: listings are returned in ascending id order

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, NoteId, OwnerId};
use crate::domain::note::Note;

/// Store port for Note persistence.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a new note and return it carrying its assigned id.
    ///
    /// Any id already present on `note` is replaced.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, note: Note) -> Result<Note, DomainError>;

    /// Replace the stored note with the same id.
    ///
    /// Updating an id that is not stored is a no-op.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `note` has no id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, note: Note) -> Result<(), DomainError>;

    /// Remove the note with `id`. Removing an unknown id is a no-op.
    async fn delete(&self, id: NoteId) -> Result<(), DomainError>;

    /// Find a note by its id.
    ///
    /// Returns `None` if not found.
    async fn get_one(&self, id: NoteId) -> Result<Option<Note>, DomainError>;

    /// All notes owned by `owner_id`, possibly none.
    async fn get_all_for_owner(&self, owner_id: OwnerId) -> Result<Vec<Note>, DomainError>;

    /// Every stored note.
    async fn get_all(&self) -> Result<Vec<Note>, DomainError>;
}
