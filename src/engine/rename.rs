//! Applying the final renames.
//! Best-effort: per-pair failures are reported and the batch continues.

use std::fs;
use std::io;

use tracing::{error, info};

use crate::config::Config;
use crate::output as out;
use crate::set::PathSet;

/// What happened across the batch. Partial success is normal and expected,
/// not itself an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameReport {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walk both sets position-by-position up to the shorter length and rename
/// each active pair. Tombstoned destinations are skipped. A failed rename is
/// reported with source, destination, and OS error text, then processing
/// moves on to the next pair.
///
/// When the source itself is missing, any partially created destination is
/// removed so no zero-length artifact is left behind.
pub fn apply_renames(sources: &PathSet, destinations: &PathSet, config: &Config) -> RenameReport {
    let len = sources.len().min(destinations.len());
    let mut report = RenameReport::default();

    for i in 0..len {
        let Some(src) = sources.get(i).and_then(|s| s.as_active()) else {
            continue;
        };
        let Some(dest) = destinations.get(i).and_then(|d| d.as_active()) else {
            report.skipped += 1;
            continue;
        };

        if config.dry_run {
            out::print_user(&format!("would rename '{src}' -> '{dest}'"));
            report.renamed += 1;
            continue;
        }

        match fs::rename(src, dest) {
            Ok(()) => {
                report.renamed += 1;
                info!(src, dest, "renamed");
                if config.verbose {
                    out::print_user(&format!("'{src}' -> '{dest}'"));
                }
            }
            Err(e) => {
                report.failed += 1;
                error!(src, dest, error = %e, "rename failed");
                out::print_error(&format!("'{src}' -> '{dest}': {e}"));
                if e.kind() == io::ErrorKind::NotFound {
                    let _ = fs::remove_file(dest);
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{DedupMode, PathSet};
    use std::fs;

    fn set_of(items: &[String]) -> PathSet {
        PathSet::create(items.iter().cloned(), DedupMode::Reject).unwrap()
    }

    fn quiet_config() -> Config {
        Config::default()
    }

    #[test]
    fn renames_active_pairs() {
        let td = tempfile::tempdir().unwrap();
        let a = td.path().join("a");
        fs::write(&a, "payload").unwrap();
        let b = td.path().join("b");

        let sources = set_of(&[a.to_string_lossy().into_owned()]);
        let dests = set_of(&[b.to_string_lossy().into_owned()]);

        let report = apply_renames(&sources, &dests, &quiet_config());

        assert_eq!(report, RenameReport { renamed: 1, skipped: 0, failed: 0 });
        assert!(!a.exists());
        assert_eq!(fs::read_to_string(&b).unwrap(), "payload");
    }

    #[test]
    fn skips_tombstoned_pairs() {
        let td = tempfile::tempdir().unwrap();
        let a = td.path().join("a");
        fs::write(&a, "x").unwrap();

        let sources = set_of(&[a.to_string_lossy().into_owned()]);
        let mut dests = set_of(&[td.path().join("b").to_string_lossy().into_owned()]);
        dests.tombstone(0);

        let report = apply_renames(&sources, &dests, &quiet_config());

        assert_eq!(report, RenameReport { renamed: 0, skipped: 1, failed: 0 });
        assert!(a.exists());
    }

    #[test]
    fn failure_does_not_abort_the_batch() {
        let td = tempfile::tempdir().unwrap();
        let a = td.path().join("a");
        let c = td.path().join("c");
        fs::write(&a, "first").unwrap();
        fs::write(&c, "third").unwrap();

        // Middle pair fails: its destination's parent directory is missing.
        let ghost = td.path().join("b");
        let sources = set_of(&[
            a.to_string_lossy().into_owned(),
            ghost.to_string_lossy().into_owned(),
            c.to_string_lossy().into_owned(),
        ]);
        let dests = set_of(&[
            td.path().join("a2").to_string_lossy().into_owned(),
            td.path().join("b2").to_string_lossy().into_owned(),
            td.path().join("c2").to_string_lossy().into_owned(),
        ]);

        let report = apply_renames(&sources, &dests, &quiet_config());

        assert_eq!(report, RenameReport { renamed: 2, skipped: 0, failed: 1 });
        assert!(td.path().join("a2").exists());
        assert!(td.path().join("c2").exists());
        assert!(!td.path().join("b2").exists());
    }

    #[test]
    fn dry_run_performs_no_renames() {
        let td = tempfile::tempdir().unwrap();
        let a = td.path().join("a");
        fs::write(&a, "x").unwrap();
        let b = td.path().join("b");

        let sources = set_of(&[a.to_string_lossy().into_owned()]);
        let dests = set_of(&[b.to_string_lossy().into_owned()]);

        let config = Config { dry_run: true, ..Config::default() };
        let report = apply_renames(&sources, &dests, &config);

        assert_eq!(report.renamed, 1);
        assert!(a.exists());
        assert!(!b.exists());
    }
}
