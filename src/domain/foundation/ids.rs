//! Strongly-typed identifier value objects.
//!
//! Notes and their owners are keyed by 64-bit integers on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Store-assigned identifier of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_i64("id", s).map(Self)
    }
}

/// Identifier of the principal owning a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_i64("ownerId", s).map(Self)
    }
}

fn parse_i64(field: &str, s: &str) -> Result<i64, ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    s.parse::<i64>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_parses_integer() {
        let id: NoteId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn note_id_rejects_non_numeric() {
        let err = "abc".parse::<NoteId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "id"));
    }

    #[test]
    fn note_id_rejects_empty() {
        let err = "".parse::<NoteId>().unwrap_err();
        assert_eq!(err, ValidationError::empty_field("id"));
    }

    #[test]
    fn owner_id_accepts_negative_values() {
        let owner: OwnerId = "-7".parse().unwrap();
        assert_eq!(owner.as_i64(), -7);
    }

    #[test]
    fn owner_id_rejects_overflow() {
        assert!("99999999999999999999".parse::<OwnerId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        assert_eq!(serde_json::to_string(&NoteId::new(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&OwnerId::new(9)).unwrap(), "9");
    }

    #[test]
    fn note_ids_order_numerically() {
        assert!(NoteId::new(2) < NoteId::new(10));
    }
}
