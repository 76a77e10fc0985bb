//! The rename-resolution engine: modularized.
//!
//! Walks the source and destination sets in lock-step by position. The
//! filter drops pairs the user left unchanged, the cycle breaker stages
//! colliding sources out of the way, and the renamer applies what remains.

mod cycles;
mod filter;
mod rename;

pub use cycles::break_cycles;
pub use filter::remove_unedited;
pub use rename::{apply_renames, RenameReport};
