//! Writing serialized output to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};

/// Creates the parent directory of `path` when it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes `bytes` to `path`, replacing any existing file.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
