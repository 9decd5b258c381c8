//! Memo archive discovery and extraction.
//!
//! # Responsibility
//! - List `*.memo` files directly inside an input directory.
//! - Extract one archive into its own scratch directory and parse the
//!   embedded content document.
//!
//! # Invariants
//! - Discovery is non-recursive and returns paths sorted by file name.
//! - File names are kept as `OsString`s; names that are not valid UTF-8 are
//!   discovered like any other.
//! - The per-archive scratch directory is gone when `read_memo_archive`
//!   returns, whatever the outcome.
//!
//! # Limits
//! - `memo_content.xml` must be UTF-8 (a leading BOM is fine). Documents in
//!   other encodings fail with `ReadContent`, even when their XML
//!   declaration names the encoding.

use super::document::MemoDocument;
use crate::error::{ConvertError, ConvertResult};
use log::debug;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// File extension of memo backup archives.
pub const MEMO_EXTENSION: &str = "memo";
/// Name of the XML document inside every memo archive.
pub const CONTENT_DOCUMENT: &str = "memo_content.xml";

const EXTRACT_DIR_PREFIX: &str = "memo-";

/// Lists memo archives directly inside `input_dir`, sorted by file name.
///
/// # Errors
/// - `InputDirectory` / `NotADirectory` when `input_dir` is unusable.
/// - `Enumerate` when the directory listing fails.
pub fn discover_archives(input_dir: &Path) -> ConvertResult<Vec<PathBuf>> {
    let metadata = fs::metadata(input_dir).map_err(|source| ConvertError::InputDirectory {
        path: input_dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ConvertError::NotADirectory(input_dir.to_path_buf()));
    }

    let enumerate_error = |source: std::io::Error| ConvertError::Enumerate {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut archives = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(enumerate_error)? {
        let path = entry.map_err(enumerate_error)?.path();
        if path.extension() == Some(OsStr::new(MEMO_EXTENSION)) && path.is_file() {
            archives.push(path);
        }
    }
    archives.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
    Ok(archives)
}

/// Display name of an archive: its file name without the `.memo` extension.
pub fn archive_label(archive_path: &Path) -> String {
    archive_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| archive_path.display().to_string())
}

/// Extracts `archive_path` under `scratch_root` and parses its content document.
///
/// A uniquely named subdirectory of `scratch_root` is created for the
/// extraction and removed before returning. Its name does not derive from
/// the archive name, so long file names cannot exceed path limits.
///
/// # Errors
/// - `Scratch` when the subdirectory cannot be created or removed.
/// - `OpenArchive` / `Archive` when the file is not a readable ZIP container.
/// - `MissingContent` when the archive has no `memo_content.xml`.
/// - `ReadContent` / `Xml` when the document cannot be read or parsed.
pub fn read_memo_archive(archive_path: &Path, scratch_root: &Path) -> ConvertResult<MemoDocument> {
    let extract_dir = tempfile::Builder::new()
        .prefix(EXTRACT_DIR_PREFIX)
        .tempdir_in(scratch_root)
        .map_err(ConvertError::Scratch)?;

    let file = File::open(archive_path).map_err(|source| ConvertError::OpenArchive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|source| ConvertError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
    archive
        .extract(extract_dir.path())
        .map_err(|source| ConvertError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
    debug!(
        "event=memo_extract module=memo status=ok entries={} dir={}",
        archive.len(),
        extract_dir.path().display()
    );

    let xml_path = extract_dir.path().join(CONTENT_DOCUMENT);
    if !xml_path.is_file() {
        return Err(ConvertError::MissingContent {
            archive: archive_path.to_path_buf(),
        });
    }
    let xml = fs::read_to_string(&xml_path).map_err(|source| ConvertError::ReadContent {
        path: xml_path.clone(),
        source,
    })?;
    let document = MemoDocument::parse(&xml).map_err(|source| ConvertError::Xml {
        archive: archive_path.to_path_buf(),
        source,
    })?;

    extract_dir.close().map_err(ConvertError::Scratch)?;
    Ok(document)
}
