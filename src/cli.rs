//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - -v/--verbose enables per-rename reporting (and implies --log-level info).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Rename a batch of files by editing their names as plain text.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename batches of files by editing their names in your editor"
)]
pub struct Args {
    /// Files to rename. Each path must exist; naming the same file twice is
    /// an error.
    #[arg(value_name = "PATH", required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,

    /// Resolve each source to its canonical path (stable against symlinks
    /// and relative spellings) instead of using the literal argument.
    #[arg(short = 'r', long, help = "Use canonical (resolved) source paths")]
    pub resolve_paths: bool,

    /// Report every rename performed.
    #[arg(short = 'v', long, help = "Print each rename as it is applied")]
    pub verbose: bool,

    /// Dry-run: print the planned renames but do not modify the filesystem.
    #[arg(long, help = "Show what would be done, but do not modify files")]
    pub dry_run: bool,

    /// Editor command used to edit the name list. Overrides $VISUAL/$EDITOR.
    #[arg(long, value_name = "COMMAND", help = "Editor command (overrides $VISUAL/$EDITOR)")]
    pub editor: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Also write logs to a file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > --verbose > default.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        if let Some(parsed) = self.log_level.as_deref().and_then(LogLevel::parse) {
            return parsed;
        }
        if self.verbose {
            return LogLevel::Info;
        }
        LogLevel::default()
    }

    /// Assemble the runtime Config from the parsed flags.
    pub fn to_config(&self) -> Config {
        Config {
            resolve_paths: self.resolve_paths,
            verbose: self.verbose,
            dry_run: self.dry_run,
            log_level: self.effective_log_level(),
            log_file: self.log_file.clone(),
            json: self.json,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
