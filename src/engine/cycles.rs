//! Breaking rename cycles.
//!
//! `mv a b; mv b a` as two independent renames destroys data: by the time
//! the second rename runs, its source has been overwritten. Whenever a
//! destination names a file that is itself still awaiting its own rename,
//! that pending file is staged first: renamed on disk to a unique temporary
//! sibling name, with its source slot rewritten to match. Its eventual
//! rename (temporary name → destination) happens in the normal rename pass.
//! This turns any rename permutation, multi-element cycles included, into a
//! DAG with at most one extra rename per colliding entry. No global cycle
//! detection is needed: each collision is resolved independently, and by the
//! time the rename pass reaches a pair, every name it writes to has been
//! vacated.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::errors::EdmvError;
use crate::set::PathSet;

/// Stage every pending source that some other pair's destination collides
/// with. Pairs are visited in order; tombstoned destinations are skipped.
///
/// A collision only matters while the named file is still awaiting its own
/// rename. A destination that matches a source whose pair was filtered (or
/// has no destination line) is an ordinary overwrite, which the rename pass
/// handles like any other rename.
///
/// Failure to create a temporary name or to perform the staging rename is
/// fatal: a half-broken cycle risks data loss, so the error propagates and
/// the batch stops. Staging already performed stands.
pub fn break_cycles(sources: &mut PathSet, destinations: &PathSet, dry_run: bool) -> Result<()> {
    let len = sources.len().min(destinations.len());

    for i in 0..len {
        let Some(dest) = destinations.get(i).and_then(|d| d.as_active()) else {
            continue;
        };
        let Some(pending) = sources.duplicate_lookup(dest, i) else {
            continue;
        };
        if !destinations
            .get(pending)
            .is_some_and(|d| d.is_active())
        {
            debug!(position = i, dest, "destination exists in the batch but has no pending rename");
            continue;
        }

        debug!(
            position = i,
            dest,
            pending,
            "destination is itself a pending source"
        );

        if dry_run {
            info!(path = dest, "dry-run: would stage through a temporary name");
            continue;
        }

        let staged = stage_aside(Path::new(dest))?;
        info!(path = dest, staged = %staged, "staged out of the way of a pending rename");
        sources.replace(pending, staged);
    }

    Ok(())
}

/// Rename `src` to a unique temporary sibling name and return that name.
///
/// The temporary file is created first so the name is reserved atomically,
/// then the source is renamed over it. The empty placeholder is removed
/// again if the rename fails.
fn stage_aside(src: &Path) -> Result<String, EdmvError> {
    let dir = match src.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "edmv".to_string());

    let placeholder = tempfile::Builder::new()
        .prefix(&format!("{file_name}."))
        .suffix(".edmv")
        .tempfile_in(dir)
        .map_err(|e| EdmvError::TempFile {
            path: src.to_path_buf(),
            source: e,
        })?;

    let staged = placeholder
        .into_temp_path()
        .keep()
        .map_err(|e| EdmvError::TempFile {
            path: src.to_path_buf(),
            source: e.error,
        })?;

    if let Err(e) = fs::rename(src, &staged) {
        let _ = fs::remove_file(&staged);
        return Err(EdmvError::CycleBreak {
            path: src.to_path_buf(),
            source: e,
        });
    }

    Ok(staged.to_string_lossy().into_owned())
}
