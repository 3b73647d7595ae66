//! In-Memory Note Store Adapter
//!
//! Keeps notes in process memory. Used as the default backend and in tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, NoteId, OwnerId};
use crate::domain::note::Note;
use crate::ports::NoteStore;

#[derive(Debug)]
struct Inner {
    notes: BTreeMap<NoteId, Note>,
    by_owner: HashMap<OwnerId, BTreeSet<NoteId>>,
    next_id: i64,
}

impl Inner {
    fn unindex(&mut self, owner_id: OwnerId, id: NoteId) {
        if let Some(ids) = self.by_owner.get_mut(&owner_id) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_owner.remove(&owner_id);
            }
        }
    }
}

/// In-memory storage for notes.
///
/// The primary map and the owner index live behind one lock so they are
/// always updated together. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryNoteStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                notes: BTreeMap::new(),
                by_owner: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Get the number of stored notes
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn create(&self, note: Note) -> Result<Note, DomainError> {
        let mut inner = self.inner.write().await;

        let id = NoteId::new(inner.next_id);
        inner.next_id = inner.next_id.checked_add(1).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Note id space exhausted")
        })?;

        let note = note.with_id(id);
        inner
            .by_owner
            .entry(note.owner_id())
            .or_default()
            .insert(id);
        inner.notes.insert(id, note.clone());

        Ok(note)
    }

    async fn update(&self, note: Note) -> Result<(), DomainError> {
        let id = note.id().ok_or_else(|| {
            DomainError::new(ErrorCode::ValidationFailed, "Cannot update a note without an id")
        })?;

        let mut inner = self.inner.write().await;
        let previous_owner = match inner.notes.get(&id) {
            Some(existing) => existing.owner_id(),
            None => return Ok(()),
        };

        if previous_owner != note.owner_id() {
            inner.unindex(previous_owner, id);
            inner
                .by_owner
                .entry(note.owner_id())
                .or_default()
                .insert(id);
        }
        inner.notes.insert(id, note);

        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if let Some(removed) = inner.notes.remove(&id) {
            inner.unindex(removed.owner_id(), id);
        }
        Ok(())
    }

    async fn get_one(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.notes.get(&id).cloned())
    }

    async fn get_all_for_owner(&self, owner_id: OwnerId) -> Result<Vec<Note>, DomainError> {
        let inner = self.inner.read().await;
        let notes = inner
            .by_owner
            .get(&owner_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.notes.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(notes)
    }

    async fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.notes.values().cloned().collect())
    }
}
