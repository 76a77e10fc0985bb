//! Dropping pairs the user left unchanged.
//! No diff is computed: byte equality at matching positions is the contract.

use tracing::debug;

use crate::set::PathSet;

/// Tombstone every destination slot whose string equals the source at the
/// same position. Walks up to the shorter length. Returns the number of
/// pairs filtered out.
pub fn remove_unedited(sources: &PathSet, destinations: &mut PathSet) -> usize {
    let len = sources.len().min(destinations.len());
    let mut filtered = 0;

    for i in 0..len {
        let src = sources.get(i).and_then(|s| s.as_active());
        let dest = destinations.get(i).and_then(|d| d.as_active());

        let unchanged = matches!((src, dest), (Some(s), Some(d)) if s == d);
        if unchanged {
            debug!(position = i, path = src.unwrap_or(""), "not edited, no rename");
            destinations.tombstone(i);
            filtered += 1;
        }
    }

    filtered
}
