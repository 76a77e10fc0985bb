//! Core library for `edmv`.
//!
//! Renames a batch of files by letting the user edit the name list as plain
//! text. The interesting part is the rename-resolution engine: the
//! deduplicating, tombstoning [`set::PathSet`] holding the source and
//! destination lists in positional lock-step, and the filter / cycle-break /
//! rename passes in [`engine`] that turn the edited list into safe renames.
//! Everything is single-threaded and synchronous; one thread of control owns
//! both sets for the program's lifetime.

pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod output;
pub mod set;

pub use config::{Config, LogLevel};
pub use editor::EditorConfig;
pub use engine::{apply_renames, break_cycles, remove_unedited, RenameReport};
pub use errors::EdmvError;
pub use set::{build_destination_set, build_source_set, DedupMode, PathSet, Slot};
