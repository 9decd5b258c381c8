//! Archive batch processor.
//!
//! # Responsibility
//! - Convert every `*.memo` archive in a directory, in file-name order.
//! - Write one backup document once all archives are handled.
//!
//! # Invariants
//! - The output file is only written after every archive was processed; an
//!   aborted run leaves any existing output untouched.
//! - The run-level scratch directory is removed on success and on abort.
//! - Emitted note keys are contiguous even when archives are skipped.
//!
//! # Side effects
//! - Creates and removes scratch directories under `options.scratch_root`
//!   (the system temp dir by default).
//! - Overwrites `output_file` without confirmation.

use super::options::{ConvertOptions, FailurePolicy, TransformOptions};
use super::transform::memo_to_note;
use crate::error::{ConvertError, ConvertResult};
use crate::memo::archive::{archive_label, discover_archives, read_memo_archive};
use crate::model::backup::NotesBackup;
use crate::model::note::Note;
use chrono::Utc;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const SCRATCH_PREFIX: &str = "memoport-";

/// Archive left out of the output under `FailurePolicy::Skip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArchive {
    pub path: PathBuf,
    /// Rendered error, including its source chain.
    pub reason: String,
}

/// Summary of one completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Number of `*.memo` files found.
    pub archives_found: usize,
    /// Number of notes in the written backup.
    pub notes_written: usize,
    pub skipped: Vec<SkippedArchive>,
    pub output_file: PathBuf,
}

/// Converts every memo archive in `input_dir` into one backup at `output_file`.
///
/// # Errors
/// - Any `ConvertError` from discovery, scratch handling, serialization or
///   writing the output.
/// - Archive-local errors (corrupt container, missing or malformed content
///   document) unless `options.failure_policy` is `Skip`.
pub fn convert_directory(
    input_dir: &Path,
    output_file: &Path,
    options: &ConvertOptions,
) -> ConvertResult<ConvertReport> {
    let started_at = Instant::now();
    info!(
        "event=convert module=convert status=start input={} output={}",
        input_dir.display(),
        output_file.display()
    );

    let archives = discover_archives(input_dir).inspect_err(|err| log_abort(err, started_at))?;
    info!(
        "event=convert_discover module=convert status=ok archives={}",
        archives.len()
    );

    let mut scratch_builder = tempfile::Builder::new();
    scratch_builder.prefix(SCRATCH_PREFIX);
    let scratch = match options.scratch_root.as_deref() {
        Some(root) => scratch_builder.tempdir_in(root),
        None => scratch_builder.tempdir(),
    }
    .map_err(ConvertError::Scratch)
        .inspect_err(|err| log_abort(err, started_at))?;

    let mut notes = Vec::with_capacity(archives.len());
    let mut skipped = Vec::new();
    for archive_path in &archives {
        match convert_archive(archive_path, scratch.path(), &options.transform) {
            Ok(note) => notes.push(note),
            Err(err) if options.failure_policy == FailurePolicy::Skip && err.is_archive_local() => {
                let reason = render_error_chain(&err);
                warn!(
                    "event=memo_convert module=convert status=skipped memo={} error_code={} error={}",
                    archive_label(archive_path),
                    err.code(),
                    reason
                );
                skipped.push(SkippedArchive {
                    path: archive_path.clone(),
                    reason,
                });
            }
            Err(err) => {
                log_abort(&err, started_at);
                return Err(err);
            }
        }
    }

    scratch
        .close()
        .map_err(ConvertError::Scratch)
        .inspect_err(|err| log_abort(err, started_at))?;

    let notes_written = notes.len();
    write_backup(&NotesBackup::new(notes), output_file)
        .inspect_err(|err| log_abort(err, started_at))?;

    info!(
        "event=convert module=convert status=ok archives={} notes={} skipped={} duration_ms={}",
        archives.len(),
        notes_written,
        skipped.len(),
        started_at.elapsed().as_millis()
    );

    Ok(ConvertReport {
        archives_found: archives.len(),
        notes_written,
        skipped,
        output_file: output_file.to_path_buf(),
    })
}

/// Extracts, parses and transforms a single archive.
///
/// `modified` (and a missing creation time) use the clock reading taken
/// after the archive was parsed.
pub fn convert_archive(
    archive_path: &Path,
    scratch_root: &Path,
    options: &TransformOptions,
) -> ConvertResult<Note> {
    let label = archive_label(archive_path);
    info!("event=memo_convert module=convert status=start memo={label}");

    let document = read_memo_archive(archive_path, scratch_root)?;
    let note = memo_to_note(&document, options, Utc::now());

    info!("event=memo_convert module=convert status=ok memo={label}");
    Ok(note)
}

/// Serializes `backup` and writes it to `output_file`, replacing any file there.
pub fn write_backup(backup: &NotesBackup, output_file: &Path) -> ConvertResult<()> {
    let bytes = backup.to_json_bytes()?;
    fs::write(output_file, bytes).map_err(|source| ConvertError::WriteOutput {
        path: output_file.to_path_buf(),
        source,
    })
}

/// Renders an error and each `source()` below it as `a: b: c`.
pub fn render_error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}

fn log_abort(err: &ConvertError, started_at: Instant) {
    error!(
        "event=convert module=convert status=error duration_ms={} error_code={} error={}",
        started_at.elapsed().as_millis(),
        err.code(),
        render_error_chain(err)
    );
}

#[cfg(test)]
mod tests {
    use super::render_error_chain;
    use crate::error::ConvertError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn error_chain_includes_sources() {
        let err = ConvertError::OpenArchive {
            path: PathBuf::from("x.memo"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(render_error_chain(&err), "cannot open memo archive `x.memo`: gone");
    }
}
