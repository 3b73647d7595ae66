//! PostgreSQL implementation of NoteStore.
//!
//! Persists notes to the `notes` table. The free-form members of a note are
//! kept as JSON object text in a single TEXT column, so member order, number
//! text and `\u0000` escapes come back exactly as they went in.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, NoteId, OwnerId};
use crate::domain::note::Note;
use crate::ports::NoteStore;

/// PostgreSQL implementation of NoteStore.
#[derive(Clone)]
pub struct PostgresNoteStore {
    pool: PgPool,
}

impl PostgresNoteStore {
    /// Creates a new PostgresNoteStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PostgresNoteStore {
    async fn create(&self, note: Note) -> Result<Note, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO notes (owner_id, fields)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(note.owner_id().as_i64())
        .bind(encode_fields(note.fields())?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert note", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database("Failed to get id", e))?;

        Ok(note.with_id(NoteId::new(id)))
    }

    async fn update(&self, note: Note) -> Result<(), DomainError> {
        let id = note.id().ok_or_else(|| {
            DomainError::new(ErrorCode::ValidationFailed, "Cannot update a note without an id")
        })?;

        let result = sqlx::query(
            r#"
            UPDATE notes SET
                owner_id = $2,
                fields = $3
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(note.owner_id().as_i64())
        .bind(encode_fields(note.fields())?)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database("Failed to update note", e)
                .with_detail("note_id", id.to_string())
        })?;

        if result.rows_affected() == 0 {
            tracing::debug!(note_id = %id, "Update matched no stored note");
        }

        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database("Failed to delete note", e)
                    .with_detail("note_id", id.to_string())
            })?;

        Ok(())
    }

    async fn get_one(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        let row = sqlx::query("SELECT id, owner_id, fields FROM notes WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database("Failed to fetch note", e)
                    .with_detail("note_id", id.to_string())
            })?;

        row.map(row_to_note).transpose()
    }

    async fn get_all_for_owner(&self, owner_id: OwnerId) -> Result<Vec<Note>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, fields
            FROM notes
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database("Failed to fetch notes by owner", e)
                .with_detail("owner_id", owner_id.to_string())
        })?;

        rows.into_iter().map(row_to_note).collect()
    }

    async fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        let rows = sqlx::query("SELECT id, owner_id, fields FROM notes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch notes", e))?;

        rows.into_iter().map(row_to_note).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_note(row: sqlx::postgres::PgRow) -> Result<Note, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;

    let owner_id: i64 = row
        .try_get("owner_id")
        .map_err(|e| DomainError::database("Failed to get owner_id", e))?;

    let fields: String = row
        .try_get("fields")
        .map_err(|e| DomainError::database("Failed to get fields", e))?;

    Ok(Note::from_parts(
        Some(NoteId::new(id)),
        OwnerId::new(owner_id),
        decode_fields(&fields).map_err(|e| e.with_detail("note_id", id.to_string()))?,
    ))
}

fn encode_fields(fields: &Map<String, Value>) -> Result<String, DomainError> {
    serde_json::to_string(fields).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to encode note fields: {}", e))
    })
}

fn decode_fields(text: &str) -> Result<Map<String, Value>, DomainError> {
    serde_json::from_str(text).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Stored note fields are not a JSON object: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_note_store_is_a_note_store() {
        fn _accepts_store<S: NoteStore + Clone>(_store: &S) {}
        fn _check(store: &PostgresNoteStore) {
            _accepts_store(store)
        }
    }

    #[test]
    fn fields_column_encodes_as_flat_object() {
        let note = Note::new(OwnerId::new(1))
            .with_field("title", "x")
            .unwrap()
            .with_id(NoteId::new(3));

        assert_eq!(encode_fields(note.fields()).unwrap(), r#"{"title":"x"}"#);
    }

    #[test]
    fn fields_column_text_survives_decode_and_encode() {
        let text = r#"{"title":"x","body":"a\u0000b","n":123456789012345678901234567890}"#;
        let fields = decode_fields(text).unwrap();
        assert_eq!(fields["body"], Value::from("a\0b"));
        assert_eq!(
            encode_fields(&fields).unwrap(),
            r#"{"title":"x","body":"a\u0000b","n":123456789012345678901234567890}"#
        );
    }

    #[test]
    fn fields_column_rejects_non_object_text() {
        let err = decode_fields("[1,2]").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
