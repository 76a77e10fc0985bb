//! Editor hand-off: write the name list to a temp file, run the user's
//! editor on it as a blocking child process, and read the edited list back.
//!
//! The editor choice is configuration, not global state: it is resolved once
//! at startup (flag > $VISUAL > $EDITOR > platform default) and passed in.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::EdmvError;
use crate::output as out;
use crate::set::PathSet;

#[cfg(windows)]
const DEFAULT_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const DEFAULT_EDITOR: &str = "nano";

/// The editor command, resolved once at startup. The command string is split
/// on whitespace: the first word is the program, the rest become leading
/// arguments (so `EDITOR="code --wait"` works).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub command: String,
}

impl EditorConfig {
    /// Resolve the editor command: CLI flag > $VISUAL > $EDITOR > default.
    /// Blank values are treated as unset.
    pub fn resolve(cli_override: Option<&str>) -> Self {
        let from_env = |name: &str| {
            env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
        };

        let command = cli_override
            .map(str::to_owned)
            .or_else(|| from_env("VISUAL"))
            .or_else(|| from_env("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self { command }
    }
}

/// Write each active entry of `set` to a fresh temp file, one per line.
/// The file is synced before the editor opens it and removed when the
/// returned handle is dropped.
pub fn write_list_to_tempfile(set: &PathSet) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("edmv-")
        .suffix(".list")
        .tempfile()
        .map_err(|e| EdmvError::TempFile {
            path: env::temp_dir(),
            source: e,
        })?;

    for (_, name) in set.active() {
        writeln!(file, "{name}")
            .with_context(|| format!("failed to write name list to '{}'", file.path().display()))?;
    }
    file.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush name list '{}'", file.path().display()))?;

    debug!(path = %file.path().display(), "wrote name list");
    Ok(file)
}

/// Run the editor on `path` and block until it exits.
///
/// A spawn failure is fatal. A non-zero exit status is only reported: the
/// user may well have saved before a harmless non-zero exit, so the edited
/// file is read back regardless.
pub fn run_editor(config: &EditorConfig, path: &Path) -> Result<()> {
    let mut parts = config.command.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("editor command is empty");
    };

    debug!(editor = config.command.as_str(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| EdmvError::EditorSpawn {
            editor: program.to_string(),
            source: e,
        })?;

    if !status.success() {
        warn!(editor = program, %status, "editor exited with non-zero status");
        out::print_warn(&format!(
            "'{program}' exited with {status}; reading the list back anyway"
        ));
    }

    Ok(())
}

/// Read the edited list back as a string.
pub fn read_edited_list(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read edited list '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{DedupMode, PathSet};
    use serial_test::serial;

    #[test]
    #[serial]
    fn resolve_prefers_flag_over_environment() {
        unsafe {
            env::set_var("VISUAL", "vis");
            env::set_var("EDITOR", "ed");
        }
        assert_eq!(EditorConfig::resolve(Some("flagged")).command, "flagged");
        unsafe {
            env::remove_var("VISUAL");
            env::remove_var("EDITOR");
        }
    }

    #[test]
    #[serial]
    fn resolve_prefers_visual_then_editor_then_default() {
        unsafe {
            env::set_var("VISUAL", "vis");
            env::set_var("EDITOR", "ed");
        }
        assert_eq!(EditorConfig::resolve(None).command, "vis");

        unsafe { env::remove_var("VISUAL") };
        assert_eq!(EditorConfig::resolve(None).command, "ed");

        unsafe { env::remove_var("EDITOR") };
        assert_eq!(EditorConfig::resolve(None).command, DEFAULT_EDITOR);
    }

    #[test]
    #[serial]
    fn resolve_skips_blank_environment_values() {
        unsafe {
            env::set_var("VISUAL", "   ");
            env::set_var("EDITOR", "ed");
        }
        assert_eq!(EditorConfig::resolve(None).command, "ed");
        unsafe {
            env::remove_var("VISUAL");
            env::remove_var("EDITOR");
        }
    }

    #[test]
    fn list_round_trips_active_entries_only() {
        let mut set =
            PathSet::create(["a", "b", "c"].map(String::from), DedupMode::Reject).unwrap();
        set.tombstone(1);

        let file = write_list_to_tempfile(&set).unwrap();
        let text = read_edited_list(file.path()).unwrap();
        assert_eq!(text, "a\nc\n");
    }

    #[cfg(unix)]
    #[test]
    fn run_editor_tolerates_non_zero_exit() {
        let cfg = EditorConfig {
            command: "false".to_string(),
        };
        let td = tempfile::tempdir().unwrap();
        let list = td.path().join("list");
        std::fs::write(&list, "x\n").unwrap();
        run_editor(&cfg, &list).unwrap();
    }

    #[test]
    fn run_editor_spawn_failure_is_fatal() {
        let cfg = EditorConfig {
            command: "definitely-not-a-real-editor-edmv".to_string(),
        };
        let td = tempfile::tempdir().unwrap();
        let list = td.path().join("list");
        std::fs::write(&list, "x\n").unwrap();
        let err = run_editor(&cfg, &list).unwrap_err();
        let typed = err.downcast_ref::<EdmvError>().unwrap();
        assert_eq!(typed.code(), "editor_spawn");
    }
}
