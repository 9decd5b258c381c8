//! `memoport` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, initialize logging and run one batch conversion.
//! - Map any fatal error to a non-zero exit status.

use clap::Parser;
use memoport_core::{
    convert_directory, default_log_level, init_logging, render_error_chain, ConvertOptions,
    FailurePolicy, TransformOptions, DEFAULT_FALLBACK_TITLE,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "memoport")]
#[command(version, about = "Convert memo backup archives into a notes JSON import file")]
struct Cli {
    /// Directory where your memos are stored
    input: PathBuf,

    /// Destination file for your JSON backup
    output: PathBuf,

    /// Title used when none is found for a memo
    #[arg(
        short = 'f',
        long = "fallbackTitle",
        visible_alias = "fallback-title",
        default_value = DEFAULT_FALLBACK_TITLE
    )]
    fallback_title: String,

    /// Skip unreadable archives instead of aborting the whole run
    #[arg(long)]
    keep_going: bool,

    /// Keep the millisecond part of each memo's creation time
    #[arg(long)]
    keep_created_millis: bool,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "MEMOPORT_LOG_LEVEL", default_value = default_log_level())]
    log_level: String,

    /// Also write rolling log files to this directory
    #[arg(long, env = "MEMOPORT_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            transform: TransformOptions {
                fallback_title: self.fallback_title.clone(),
                keep_created_millis: self.keep_created_millis,
            },
            failure_policy: if self.keep_going {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
            scratch_root: None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let log_dir = cli.log_dir.as_deref().map(absolute_path).transpose()?;
    let log_dir = log_dir
        .as_deref()
        .map(|dir| {
            dir.to_str()
                .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", dir.display()))
        })
        .transpose()?;
    init_logging(&cli.log_level, log_dir)?;

    let report = convert_directory(&cli.input, &cli.output, &cli.convert_options())
        .map_err(|err| render_error_chain(&err))?;

    println!(
        "Converted {} of {} memos into {}",
        report.notes_written,
        report.archives_found,
        report.output_file.display()
    );
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    Ok(())
}

fn absolute_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| format!("cannot resolve log directory `{}`: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use memoport_core::FailurePolicy;

    #[test]
    fn defaults_match_reference_behavior() {
        let cli = Cli::try_parse_from(["memoport", "memos", "out.json"]).unwrap();
        let options = cli.convert_options();
        assert_eq!(options.transform.fallback_title, "No title");
        assert!(!options.transform.keep_created_millis);
        assert_eq!(options.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn short_and_camel_case_fallback_flags_are_accepted() {
        let short = Cli::try_parse_from(["memoport", "in", "out", "-f", "Memo"]).unwrap();
        assert_eq!(short.fallback_title, "Memo");

        let long = Cli::try_parse_from(["memoport", "in", "out", "--fallbackTitle", "Memo"]).unwrap();
        assert_eq!(long.fallback_title, "Memo");

        let alias = Cli::try_parse_from(["memoport", "in", "out", "--fallback-title", "Memo"]).unwrap();
        assert_eq!(alias.fallback_title, "Memo");
    }

    #[test]
    fn keep_going_selects_skip_policy() {
        let cli = Cli::try_parse_from(["memoport", "in", "out", "--keep-going"]).unwrap();
        assert_eq!(cli.convert_options().failure_policy, FailurePolicy::Skip);
    }

    #[test]
    fn missing_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["memoport", "only-input"]).is_err());
    }
}
