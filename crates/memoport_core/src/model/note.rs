//! Note record in the import format.
//!
//! # Responsibility
//! - Build fresh note records carrying the fixed import constants.
//!
//! # Invariants
//! - `type`, `metadata`, `status` and `pinned` never vary between records.
//! - Every constructor call returns an independent value.

use serde::Serialize;

/// Record tag the importer uses for plain notes.
pub const NOTE_KIND: u8 = 0;
/// Status value for a regular (not archived, not trashed) note.
pub const NOTE_STATUS: u8 = 0;
/// Pinned flag emitted for every imported note.
pub const NOTE_PINNED: u8 = 1;
/// JSON-encoded metadata marking a blank note template.
pub const BLANK_METADATA: &str = r#"{"type":"blank"}"#;

/// One note in the import document.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: u8,
    pub title: String,
    /// Plain text with paragraph breaks doubled.
    pub content: String,
    /// JSON document encoded as a string, not a nested object.
    pub metadata: String,
    /// Creation instant, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub added: String,
    /// Conversion instant, same format as `added`.
    pub modified: String,
    pub status: u8,
    pub pinned: u8,
}

impl Note {
    /// Creates a note with the fixed import constants filled in.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        added: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            kind: NOTE_KIND,
            title: title.into(),
            content: content.into(),
            metadata: BLANK_METADATA.to_string(),
            added: added.into(),
            modified: modified.into(),
            status: NOTE_STATUS,
            pinned: NOTE_PINNED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, BLANK_METADATA};

    #[test]
    fn new_fills_fixed_fields() {
        let note = Note::new("t", "c", "a", "m");
        assert_eq!(note.kind, 0);
        assert_eq!(note.status, 0);
        assert_eq!(note.pinned, 1);
        assert_eq!(note.metadata, BLANK_METADATA);
    }

    #[test]
    fn constructed_notes_do_not_alias() {
        let mut first = Note::new("one", "", "a", "m");
        let second = Note::new("two", "", "a", "m");
        first.metadata.push('x');
        assert_eq!(second.metadata, BLANK_METADATA);
    }

    #[test]
    fn serializes_type_key_and_field_order() {
        let note = Note::new("Title", "Body", "2022-01-16T14:36:51.000Z", "2022-01-16T14:37:11.871Z");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"type":0,"title":"Title","content":"Body","metadata":"{\"type\":\"blank\"}","added":"2022-01-16T14:36:51.000Z","modified":"2022-01-16T14:37:11.871Z","status":0,"pinned":1}"#
        );
    }
}
