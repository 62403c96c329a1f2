//! Error types for text stages.

use std::{io, path::PathBuf};

use sift_frame::FrameError;
use thiserror::Error;

/// Errors raised by text stages and noun counting.
#[derive(Debug, Error)]
pub enum TextError {
    /// A required resource file is absent.
    #[error("required resource {path} does not exist")]
    ResourceMissing {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A resource file line cannot be understood.
    #[error("{path}:{line}: expected 'from<TAB>to', found {content:?}")]
    Malformed {
        /// Resource file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending line.
        content: String,
    },

    /// A stage returned a different number of texts than it was given.
    #[error("stage '{stage}' returned {found} texts for {expected} inputs")]
    LengthChanged {
        /// Stage name.
        stage: String,
        /// Number of inputs.
        expected: usize,
        /// Number of outputs.
        found: usize,
    },

    /// A stage implementation failed.
    #[error("stage '{stage}' failed: {message}")]
    Stage {
        /// Stage name.
        stage: String,
        /// Failure description.
        message: String,
    },

    /// Reading a resource file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing a frequency table failed.
    #[error("failed to write {path}: {source}")]
    Csv {
        /// File path.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A table operation failed.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
