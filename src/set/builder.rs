//! Building the source and destination sets.
//! - Sources come from command-line arguments and represent filesystem
//!   identity: canonical forms are always used for duplicate detection, and
//!   a duplicate is a fatal setup error.
//! - Destinations come from the edited list text and are free-form.

use anyhow::{Context, Result};
use tracing::debug;

use super::{DedupMode, PathSet};

/// Build the identity set of files to rename.
///
/// Every argument is resolved to its canonical path; an argument that cannot
/// be resolved (typically: it does not exist) aborts the run. Duplicate
/// detection always runs over the canonical forms so two spellings of the
/// same file are caught. With `resolve_paths` the canonical forms are kept;
/// otherwise the set is rebuilt from the literal argument strings so output
/// stays faithful to what the user typed. A literal duplicate implies a
/// canonical duplicate, so the rebuild cannot introduce a new failure.
pub fn build_source_set(raw_args: &[String], resolve_paths: bool) -> Result<PathSet> {
    let mut canonical = Vec::with_capacity(raw_args.len());
    for raw in raw_args {
        let real = dunce::canonicalize(raw)
            .with_context(|| format!("cannot resolve source path '{raw}'"))?;
        canonical.push(real.to_string_lossy().into_owned());
    }

    let canonical_set = PathSet::create(canonical, DedupMode::Reject)?;
    debug!(count = canonical_set.len(), resolve_paths, "source set built");

    if resolve_paths {
        Ok(canonical_set)
    } else {
        Ok(PathSet::create(raw_args.to_vec(), DedupMode::Reject)?)
    }
}

/// Build the destination set from the edited list text.
///
/// Reads at most `max_count` lines (the destination list never needs to be
/// longer than the source list). A blank line terminates the list; it is not
/// an entry. Fewer lines than sources is legal: the unmatched trailing
/// sources are simply not renamed.
pub fn build_destination_set(edited_text: &str, max_count: usize) -> Result<PathSet> {
    let mut lines = Vec::new();
    for line in edited_text.lines() {
        if lines.len() == max_count {
            break;
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    debug!(count = lines.len(), max_count, "destination set built");
    Ok(PathSet::create(lines, DedupMode::KeepFirst)?)
}
