//! Error types for the batch module.
//!
//! These are the directory-level errors that abort a whole run, as opposed to
//! [`crate::encoder::EncoderError`] which is recorded per file.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a batch conversion run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The root does not exist or is not a directory.
    #[error("root directory not found or not a directory: {path}")]
    RootNotFound { path: PathBuf },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// I/O error while reading the root directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
