//! Insertion-ordered, deduplicating path containers.
//!
//! A `PathSet` holds an ordered sequence of slots, each either an active path
//! string or a tombstone, plus a hash index for O(1) average duplicate
//! lookup. Tombstoning never shifts other slots: the source set and the
//! destination set are walked in lock-step by position, and that positional
//! correspondence must survive filtering and cycle-breaking.

mod builder;

pub use builder::{build_destination_set, build_source_set};

use std::collections::HashMap;

use crate::errors::EdmvError;

/// One slot of a `PathSet`. A tombstone marks the slot logically removed
/// while keeping its position occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Active(String),
    Tombstone,
}

impl Slot {
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }

    pub fn as_active(&self) -> Option<&str> {
        match self {
            Slot::Active(s) => Some(s.as_str()),
            Slot::Tombstone => None,
        }
    }
}

/// How `PathSet::create` treats duplicate input strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupMode {
    /// A duplicate is an error naming the offending string. Used for sets
    /// that represent filesystem identity (sources).
    Reject,
    /// Later duplicates are tombstoned in place, keeping the first
    /// occurrence. Slots after a duplicate do not shift. Used for free-form
    /// destination text.
    KeepFirst,
}

#[derive(Debug)]
pub struct PathSet {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl PathSet {
    /// Build a set from `strings` in order, deduplicating per `mode`.
    pub fn create<I>(strings: I, mode: DedupMode) -> Result<Self, EdmvError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut slots = Vec::new();
        let mut index = HashMap::new();

        for s in strings {
            if index.contains_key(&s) {
                match mode {
                    DedupMode::Reject => return Err(EdmvError::DuplicateSource(s)),
                    DedupMode::KeepFirst => slots.push(Slot::Tombstone),
                }
            } else {
                index.insert(s.clone(), slots.len());
                slots.push(Slot::Active(s));
            }
        }

        Ok(Self { slots, index })
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    /// Does `s` occupy some active slot *other than* `hint`?
    ///
    /// `hint` names the caller's own position in a sibling set and is
    /// excluded from matching. The hash index makes the positional search
    /// bias of the historical interface unnecessary.
    pub fn duplicate_lookup(&self, s: &str, hint: usize) -> Option<usize> {
        match self.index.get(s) {
            Some(&pos) if pos != hint && self.slots[pos].is_active() => Some(pos),
            _ => None,
        }
    }

    /// Mark a slot inactive. Idempotent; out-of-range positions are ignored.
    pub fn tombstone(&mut self, position: usize) {
        if let Some(slot) = self.slots.get_mut(position) {
            if let Slot::Active(s) = slot {
                self.index.remove(s.as_str());
                *slot = Slot::Tombstone;
            }
        }
    }

    /// Overwrite an active slot's string in place, keeping the index
    /// consistent. Used by cycle-breaking after the file on disk has already
    /// been renamed, so the in-memory model tracks filesystem reality.
    pub fn replace(&mut self, position: usize, new_string: String) {
        if let Some(slot) = self.slots.get_mut(position) {
            if let Slot::Active(old) = slot {
                self.index.remove(old.as_str());
                self.index.insert(new_string.clone(), position);
                *slot = Slot::Active(new_string);
            }
        }
    }

    /// Iterate all slots in insertion order, tombstones included, so two
    /// sets can be walked in lock-step by position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }

    /// Iterate only the active slots.
    pub fn active(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_active().map(|s| (i, s)))
    }
}
