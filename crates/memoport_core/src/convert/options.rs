//! Conversion options shared by the library API and the CLI.

use std::path::PathBuf;

/// Title used when a memo carries none.
pub const DEFAULT_FALLBACK_TITLE: &str = "No title";

/// What to do when a single archive cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the batch at the first unreadable archive; write nothing.
    #[default]
    Abort,
    /// Log the failure, leave the archive out and keep going.
    Skip,
}

/// Per-record transformation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Substituted when the memo has no usable title.
    pub fallback_title: String,
    /// Carry the millisecond remainder of `createdTime` into `added`
    /// instead of truncating to whole seconds.
    pub keep_created_millis: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            keep_created_millis: false,
        }
    }
}

/// Batch conversion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub transform: TransformOptions,
    pub failure_policy: FailurePolicy,
    /// Parent of the run's scratch directory; the system temp dir when `None`.
    pub scratch_root: Option<PathBuf>,
}

impl ConvertOptions {
    /// Default options with a caller-supplied fallback title.
    pub fn with_fallback_title(fallback_title: impl Into<String>) -> Self {
        Self {
            transform: TransformOptions {
                fallback_title: fallback_title.into(),
                ..TransformOptions::default()
            },
            ..Self::default()
        }
    }
}
