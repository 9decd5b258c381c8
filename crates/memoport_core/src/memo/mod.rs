//! Source-side memo archives and their embedded XML document.
//!
//! # Responsibility
//! - Locate, extract and parse one `.memo` archive at a time.
//! - Expose only the fields the converter reads, as owned values.
//!
//! # Invariants
//! - Extraction happens inside a scratch directory that is removed before
//!   the caller moves on, on success and on error.

pub mod archive;
pub mod document;
