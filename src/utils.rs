// ABOUTME: Utility functions for the deckconv application
// ABOUTME: Provides directory helpers and the atomic file replace primitive

use crate::errors::{DeckError, Result};
use std::io::Write;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(DeckError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Remove a directory tree, treating "already absent" as success
pub fn remove_dir_if_present(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DeckError::FileReadError(e)),
    }
}

/// Atomically replace `target` with `contents`.
///
/// The new contents go to a named temporary file in the target's own
/// directory (same filesystem, so the final rename is atomic). Until that
/// rename the target keeps its old contents, and the temporary file is
/// removed on every failure path before the rename.
pub fn write_atomic(target: &Path, contents: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(DeckError::FileReadError)?;
    tmp.write_all(contents.as_bytes())
        .map_err(DeckError::FileReadError)?;
    tmp.persist(target)
        .map_err(|e| DeckError::FileReadError(e.error))?;

    Ok(())
}
