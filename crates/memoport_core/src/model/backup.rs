//! Backup envelope written as the single output document.
//!
//! # Responsibility
//! - Wrap converted notes as `{ "version": 4, "notes": { "0": ..., ... } }`.
//! - Serialize with tab indentation.
//!
//! # Invariants
//! - Keys are the zero-based position of each note, emitted in ascending
//!   numeric order with no gaps.

use super::note::Note;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

/// Import format version understood by the consuming app.
pub const BACKUP_FORMAT_VERSION: u32 = 4;

const JSON_INDENT: &[u8] = b"\t";

/// Output document holding every converted note in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesBackup {
    pub version: u32,
    pub notes: Vec<Note>,
}

impl NotesBackup {
    /// Creates a backup at the current import format version.
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            version: BACKUP_FORMAT_VERSION,
            notes,
        }
    }

    /// Serializes the backup as tab-indented UTF-8 JSON.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
        self.serialize(&mut serializer)?;
        Ok(out)
    }
}

impl Serialize for NotesBackup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NotesBackup", 2)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("notes", &IndexedNotes(&self.notes))?;
        state.end()
    }
}

/// Serializes a note slice as an object keyed by stringified position.
struct IndexedNotes<'a>(&'a [Note]);

impl Serialize for IndexedNotes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, note) in self.0.iter().enumerate() {
            map.serialize_entry(&index.to_string(), note)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::NotesBackup;
    use crate::model::note::Note;

    fn note(title: &str) -> Note {
        Note::new(title, "", "2022-01-16T14:36:51.000Z", "2022-01-16T14:37:11.871Z")
    }

    #[test]
    fn empty_backup_keeps_version_and_empty_notes_object() {
        let bytes = NotesBackup::new(Vec::new()).to_json_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "{\n\t\"version\": 4,\n\t\"notes\": {}\n}");
    }

    #[test]
    fn keys_follow_processing_order_past_nine() {
        let notes = (0..12).map(|idx| note(&format!("n{idx}"))).collect();
        let bytes = NotesBackup::new(notes).to_json_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let ten = text.find("\"10\"").unwrap();
        let two = text.find("\"2\"").unwrap();
        assert!(two < ten, "keys must be emitted in numeric order");

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["notes"]["11"]["title"], "n11");
        assert_eq!(value["notes"].as_object().unwrap().len(), 12);
    }

    #[test]
    fn nested_fields_are_tab_indented() {
        let bytes = NotesBackup::new(vec![note("x")]).to_json_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n\t\t\"0\": {\n\t\t\t\"type\": 0,"));
    }
}
