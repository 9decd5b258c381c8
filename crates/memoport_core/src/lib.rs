//! Core conversion logic for memoport.
//! Reads memo backup archives and produces a notes import document.

pub mod convert;
pub mod error;
pub mod logging;
pub mod memo;
pub mod model;

pub use convert::batch::{
    convert_archive, convert_directory, render_error_chain, write_backup, ConvertReport,
    SkippedArchive,
};
pub use convert::markup::markup_to_plain_text;
pub use convert::options::{
    ConvertOptions, FailurePolicy, TransformOptions, DEFAULT_FALLBACK_TITLE,
};
pub use convert::transform::memo_to_note;
pub use error::{ConvertError, ConvertResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use memo::archive::{discover_archives, read_memo_archive, CONTENT_DOCUMENT, MEMO_EXTENSION};
pub use memo::document::MemoDocument;
pub use model::backup::{NotesBackup, BACKUP_FORMAT_VERSION};
pub use model::note::{Note, BLANK_METADATA};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
