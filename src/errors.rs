//! Typed error definitions for edmv.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdmvError {
    /// The same file was named twice on the command line. Renaming it twice
    /// would be two different instructions for one input, so the run aborts
    /// before anything is touched.
    #[error("duplicate source path '{0}': the same file cannot be renamed twice")]
    DuplicateSource(String),

    #[error("could not create temporary file '{path}': {source}")]
    TempFile { path: PathBuf, source: io::Error },

    #[error("could not launch editor '{editor}': {source}")]
    EditorSpawn { editor: String, source: io::Error },

    /// Staging a source out of the way of a rename cycle failed. This is
    /// fatal mid-batch: a half-broken cycle risks data loss.
    #[error("could not stage '{path}' to a temporary name: {source}")]
    CycleBreak { path: PathBuf, source: io::Error },
}

impl EdmvError {
    /// Stable short code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            EdmvError::DuplicateSource(_) => "duplicate_source",
            EdmvError::TempFile { .. } => "temp_file",
            EdmvError::EditorSpawn { .. } => "editor_spawn",
            EdmvError::CycleBreak { .. } => "cycle_break",
        }
    }
}
