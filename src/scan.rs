// ABOUTME: Deck discovery for the deckconv application
// ABOUTME: Enumerates presentation sources in the deck directory in stable order

use crate::config::{Config, DECK_GLOB, TEMP_PREFIX};
use crate::errors::{DeckError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// List all deck sources in the deck directory, sorted lexicographically.
///
/// Lock artifacts (`~$` prefix) are NOT filtered here; callers that need to
/// skip them check `is_temp_artifact` themselves.
pub fn find_decks(config: &Config) -> Result<Vec<PathBuf>> {
    let pattern = config.base_dir().join(DECK_GLOB);
    let pattern = pattern.to_string_lossy();

    let mut decks = Vec::new();
    for entry in (glob::glob(&pattern)
        .map_err(|e| DeckError::GlobError(format!("{}: {}", pattern, e)))?)
    .flatten()
    {
        decks.push(entry);
    }

    // Sort deck paths to ensure a deterministic conversion and index order
    decks.sort();

    Ok(decks)
}

/// Whether a deck file name is an office-suite lock artifact
pub fn is_temp_artifact(name: &str) -> bool {
    name.starts_with(TEMP_PREFIX)
}

/// The deck's file name as UTF-8
pub fn deck_file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| DeckError::ValidationError(format!("Deck filename is not valid UTF-8: {:?}", path)))
}

/// The deck's filename stem, the stable identifier across all its artifacts
pub fn deck_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| DeckError::ValidationError(format!("Deck filename is not valid UTF-8: {:?}", path)))
}
