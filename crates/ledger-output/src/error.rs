//! Errors for output writing.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
