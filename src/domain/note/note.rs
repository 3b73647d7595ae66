//! The Note record.
//!
//! A note carries a store-assigned id, the id of its owner, and any number
//! of further JSON members (`title`, `body`, ...) that are kept verbatim,
//! in the order they were received.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{NoteId, OwnerId, ValidationError};

const ID_FIELD: &str = "id";
const OWNER_ID_FIELD: &str = "ownerId";

/// Member names the record itself owns; they never appear in `fields`.
const RESERVED_FIELDS: [&str; 2] = [ID_FIELD, OWNER_ID_FIELD];

/// A single note.
///
/// Serializes as a flat JSON object:
/// `{"id": 1, "ownerId": 7, "title": "..."}`. `id` is omitted until the
/// store has assigned one; the remaining members follow in their original
/// order with their original number text.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: Option<NoteId>,
    owner_id: OwnerId,
    fields: Map<String, Value>,
}

impl Note {
    /// Creates an unsaved note with no extra fields.
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            id: None,
            owner_id,
            fields: Map::new(),
        }
    }

    /// Reconstitutes a note from its stored parts.
    ///
    /// Reserved member names found in `fields` are dropped.
    pub fn from_parts(id: Option<NoteId>, owner_id: OwnerId, fields: Map<String, Value>) -> Self {
        let fields = fields
            .into_iter()
            .filter(|(name, _)| !RESERVED_FIELDS.contains(&name.as_str()))
            .collect();
        Self {
            id,
            owner_id,
            fields,
        }
    }

    /// Adds a free-form field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if `name` is `id` or `ownerId`.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<Self, ValidationError> {
        let name = name.into();
        if RESERVED_FIELDS.contains(&name.as_str()) {
            return Err(ValidationError::invalid_format(
                name,
                "reserved member name",
            ));
        }
        self.fields.insert(name, value.into());
        Ok(self)
    }

    /// Returns a copy of this note carrying `id`.
    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Free-form members other than `id` and `ownerId`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the id, or `MissingId` for a note that was never stored.
    pub fn require_id(&self) -> Result<NoteId, super::NoteError> {
        self.id.ok_or(super::NoteError::MissingId)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.fields.len() + 1 + usize::from(self.id.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(id) = self.id {
            map.serialize_entry(ID_FIELD, &id)?;
        }
        map.serialize_entry(OWNER_ID_FIELD, &self.owner_id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let members = Map::<String, Value>::deserialize(deserializer)?;

        let mut id = None;
        let mut owner_id = None;
        let mut fields = Map::new();
        for (name, value) in members {
            match name.as_str() {
                ID_FIELD => {
                    id = Option::<NoteId>::deserialize(value).map_err(D::Error::custom)?;
                }
                OWNER_ID_FIELD => {
                    owner_id = Some(OwnerId::deserialize(value).map_err(D::Error::custom)?);
                }
                _ => {
                    fields.insert(name, value);
                }
            }
        }

        let owner_id = owner_id.ok_or_else(|| D::Error::missing_field(OWNER_ID_FIELD))?;
        Ok(Self {
            id,
            owner_id,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_without_id() {
        let note: Note = serde_json::from_str(r#"{"ownerId":1,"title":"x"}"#).unwrap();
        assert_eq!(note.id(), None);
        assert_eq!(note.owner_id(), OwnerId::new(1));
        assert_eq!(note.field("title"), Some(&json!("x")));
    }

    #[test]
    fn null_id_deserializes_as_absent() {
        let note: Note = serde_json::from_str(r#"{"id":null,"ownerId":1}"#).unwrap();
        assert_eq!(note.id(), None);
        assert!(note.fields().is_empty());
    }

    #[test]
    fn serializes_id_first_then_owner_then_fields() {
        let note = Note::new(OwnerId::new(1))
            .with_field("title", "x")
            .unwrap()
            .with_id(NoteId::new(1));

        assert_eq!(
            serde_json::to_string(&note).unwrap(),
            r#"{"id":1,"ownerId":1,"title":"x"}"#
        );
    }

    #[test]
    fn omits_absent_id_when_serializing() {
        let note = Note::new(OwnerId::new(3));
        assert_eq!(serde_json::to_string(&note).unwrap(), r#"{"ownerId":3}"#);
    }

    #[test]
    fn passes_nested_fields_through() {
        let body = json!({
            "ownerId": 2,
            "title": "groceries",
            "tags": ["food", "weekly"],
            "meta": {"pinned": true}
        });
        let note: Note = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&note).unwrap(), body);
    }

    #[test]
    fn keeps_member_order_and_number_text() {
        let body = r#"{"ownerId":1,"title":"x","body":"y","n":123456789012345678901234567890,"f":1.50}"#;
        let note: Note = serde_json::from_str(body).unwrap();

        assert_eq!(
            serde_json::to_string(&note.with_id(NoteId::new(1))).unwrap(),
            r#"{"id":1,"ownerId":1,"title":"x","body":"y","n":123456789012345678901234567890,"f":1.50}"#
        );
    }

    #[test]
    fn id_is_written_first_wherever_it_was_read() {
        let note: Note = serde_json::from_str(r#"{"title":"x","ownerId":2,"id":5}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&note).unwrap(),
            r#"{"id":5,"ownerId":2,"title":"x"}"#
        );
    }

    #[test]
    fn rejects_non_integer_id() {
        assert!(serde_json::from_str::<Note>(r#"{"id":"one","ownerId":1}"#).is_err());
        assert!(serde_json::from_str::<Note>(r#"{"id":1.5,"ownerId":1}"#).is_err());
    }

    #[test]
    fn rejects_missing_owner() {
        assert!(serde_json::from_str::<Note>(r#"{"title":"x"}"#).is_err());
    }

    #[test]
    fn rejects_non_integer_owner() {
        assert!(serde_json::from_str::<Note>(r#"{"ownerId":"one"}"#).is_err());
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(serde_json::from_str::<Note>(r#"[1,2,3]"#).is_err());
    }

    #[test]
    fn with_field_refuses_reserved_names() {
        assert!(Note::new(OwnerId::new(1)).with_field("id", 5).is_err());
        assert!(Note::new(OwnerId::new(1)).with_field("ownerId", 5).is_err());
    }

    #[test]
    fn from_parts_drops_reserved_members() {
        let mut fields = Map::new();
        fields.insert("zeta".to_string(), json!(1));
        fields.insert("id".to_string(), json!(99));
        fields.insert("body".to_string(), json!("text"));

        let note = Note::from_parts(Some(NoteId::new(1)), OwnerId::new(1), fields);
        let names: Vec<&str> = note.fields().keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "body"]);
        assert_eq!(note.id(), Some(NoteId::new(1)));
    }

    #[test]
    fn require_id_fails_for_unsaved_note() {
        let note = Note::new(OwnerId::new(1));
        assert!(note.require_id().is_err());
        assert_eq!(
            note.with_id(NoteId::new(4)).require_id().unwrap(),
            NoteId::new(4)
        );
    }
}
