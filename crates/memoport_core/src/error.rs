//! Fatal error taxonomy for archive conversion.
//!
//! # Responsibility
//! - Describe every failure that stops an archive (or the whole batch) from
//!   being converted.
//!
//! # Invariants
//! - Per-field gaps inside a readable memo are never errors; they degrade to
//!   placeholders in `convert::transform`.
//! - Every variant carries the path it concerns when one exists.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug)]
pub enum ConvertError {
    /// Input directory is missing or unreadable.
    InputDirectory { path: PathBuf, source: io::Error },
    /// Input path exists but is not a directory.
    NotADirectory(PathBuf),
    /// Directory listing failed while enumerating archives.
    Enumerate { path: PathBuf, source: io::Error },
    /// Scratch directory could not be created or removed.
    Scratch(io::Error),
    /// Archive file could not be opened.
    OpenArchive { path: PathBuf, source: io::Error },
    /// File is not a valid ZIP container, or extraction failed.
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    /// Archive does not contain the memo content document.
    MissingContent { archive: PathBuf },
    /// Extracted content document could not be read.
    ReadContent { path: PathBuf, source: io::Error },
    /// Content document is not well-formed XML.
    Xml {
        archive: PathBuf,
        source: roxmltree::Error,
    },
    /// Backup document could not be encoded as JSON.
    Serialize(serde_json::Error),
    /// Output file could not be written.
    WriteOutput { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Returns whether the failure is confined to one archive.
    ///
    /// Such failures may be skipped under `FailurePolicy::Skip`; everything
    /// else always aborts the batch.
    pub fn is_archive_local(&self) -> bool {
        matches!(
            self,
            Self::OpenArchive { .. }
                | Self::Archive { .. }
                | Self::MissingContent { .. }
                | Self::ReadContent { .. }
                | Self::Xml { .. }
        )
    }

    /// Stable short code used in structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputDirectory { .. } => "input_dir_unreadable",
            Self::NotADirectory(_) => "input_not_dir",
            Self::Enumerate { .. } => "input_dir_list_failed",
            Self::Scratch(_) => "scratch_failed",
            Self::OpenArchive { .. } => "archive_open_failed",
            Self::Archive { .. } => "archive_invalid",
            Self::MissingContent { .. } => "content_missing",
            Self::ReadContent { .. } => "content_read_failed",
            Self::Xml { .. } => "content_xml_invalid",
            Self::Serialize(_) => "serialize_failed",
            Self::WriteOutput { .. } => "output_write_failed",
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputDirectory { path, .. } => {
                write!(f, "cannot read input directory `{}`", path.display())
            }
            Self::NotADirectory(path) => {
                write!(f, "input path `{}` is not a directory", path.display())
            }
            Self::Enumerate { path, .. } => {
                write!(f, "failed to list memo archives in `{}`", path.display())
            }
            Self::Scratch(_) => write!(f, "scratch directory failure"),
            Self::OpenArchive { path, .. } => {
                write!(f, "cannot open memo archive `{}`", path.display())
            }
            Self::Archive { path, .. } => {
                write!(f, "`{}` is not a readable memo archive", path.display())
            }
            Self::MissingContent { archive } => write!(
                f,
                "memo archive `{}` has no {}",
                archive.display(),
                crate::memo::archive::CONTENT_DOCUMENT
            ),
            Self::ReadContent { path, .. } => {
                write!(f, "cannot read memo content `{}`", path.display())
            }
            Self::Xml { archive, .. } => write!(
                f,
                "memo content in `{}` is not well-formed XML",
                archive.display()
            ),
            Self::Serialize(_) => write!(f, "failed to serialize notes backup"),
            Self::WriteOutput { path, .. } => {
                write!(f, "cannot write output file `{}`", path.display())
            }
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputDirectory { source, .. } => Some(source),
            Self::NotADirectory(_) => None,
            Self::Enumerate { source, .. } => Some(source),
            Self::Scratch(err) => Some(err),
            Self::OpenArchive { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            Self::MissingContent { .. } => None,
            Self::ReadContent { source, .. } => Some(source),
            Self::Xml { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::WriteOutput { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ConvertError;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn archive_local_errors_are_classified() {
        let missing = ConvertError::MissingContent {
            archive: PathBuf::from("a.memo"),
        };
        assert!(missing.is_archive_local());

        let scratch = ConvertError::Scratch(io::Error::new(io::ErrorKind::Other, "full"));
        assert!(!scratch.is_archive_local());
    }

    #[test]
    fn display_names_the_path_and_source_is_chained() {
        let err = ConvertError::WriteOutput {
            path: PathBuf::from("/tmp/out.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out.json"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
        assert_eq!(err.code(), "output_write_failed");
    }
}
