// ABOUTME: Conversion orchestration for the deckconv application
// ABOUTME: Drives the external HTML converter and PDF exporter for each deck

use crate::config::{Config, SOFFICE_BIN, TEMP_PREFIX};
use crate::errors::{DeckError, Result};
use crate::exec::run_tool;
use crate::scan;
use crate::utils::{ensure_directory_exists, remove_dir_if_present};
use log::info;
use std::path::Path;

/// Remove stray HTML output directories left behind by interrupted runs.
///
/// These match the lock-artifact naming (`~$<stem>_html`). A directory that
/// is already absent counts as cleaned, not as an error.
pub fn clean_stray_outputs(config: &Config) -> Result<()> {
    let pattern = config.base_dir().join(format!("{TEMP_PREFIX}*_html"));
    let pattern = pattern.to_string_lossy();

    for entry in (glob::glob(&pattern)
        .map_err(|e| DeckError::GlobError(format!("{}: {}", pattern, e)))?)
    .flatten()
    {
        remove_dir_if_present(&entry)?;
    }

    Ok(())
}

/// Convert every deck to HTML and PDF, overwriting previous outputs.
///
/// Decks still locked by the office suite (`~$` prefix) are skipped. Both
/// converters run with the deck directory as their working directory, so
/// the PDF exporter drops its output next to the source. Any converter
/// failure aborts the whole run.
pub fn convert_all(config: &Config, converter: &Path) -> Result<()> {
    for deck in scan::find_decks(config)? {
        let name = scan::deck_file_name(&deck)?;
        if scan::is_temp_artifact(name) {
            info!("Skipping temp file: {}", name);
            continue;
        }

        let stem = scan::deck_stem(&deck)?;
        let outdir_name = format!("{stem}_html");

        info!("Converting {} -> HTML ({}/) (overwrite)", name, outdir_name);
        let outdir = config.html_output_dir(stem);
        remove_dir_if_present(&outdir)?;
        ensure_directory_exists(&outdir)?;
        run_tool(
            converter,
            [name, "-o", outdir_name.as_str()],
            config.base_dir(),
        )?;

        info!("Converting {} -> PDF (overwrite)", name);
        run_tool(
            SOFFICE_BIN,
            ["--headless", "--convert-to", "pdf", name],
            config.base_dir(),
        )?;
    }

    Ok(())
}
