//! Error types for spaceoptlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading apartment data
#[derive(Error, Debug)]
pub enum SpaceOptError {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
