//! Target-side data model for the notes import document.
//!
//! # Responsibility
//! - Define the note record and backup envelope consumed by the importing app.
//! - Own timestamp formatting shared by `added` and `modified`.
//!
//! # Invariants
//! - Field names and fixed constants match the import format exactly.
//! - Note keys in a backup are contiguous, zero-based positions.

pub mod backup;
pub mod note;
pub mod timestamp;
