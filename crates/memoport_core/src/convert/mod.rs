//! Memo-to-note conversion.
//!
//! # Responsibility
//! - Turn one parsed memo into one note record (`transform`).
//! - Drive discovery, extraction, transformation and output for a whole
//!   input directory (`batch`).
//!
//! # See also
//! - `crate::memo` for the source format.
//! - `crate::model` for the target format.

pub mod batch;
pub mod markup;
pub mod options;
pub mod transform;
