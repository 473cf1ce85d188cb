// ABOUTME: Environment bootstrapping for the deckconv application
// ABOUTME: Verifies and prepares the interpreter, venv, converter and exporter

use crate::config::{Config, CONVERTER_BIN, CONVERTER_PACKAGE, PYTHON_BIN, SOFFICE_BIN};
use crate::errors::{DeckError, Result};
use crate::exec::run_tool;
use log::info;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Verify and prepare everything the conversion pipeline needs.
///
/// Checks run in dependency order: interpreter, venv, pip, converter,
/// office suite. A missing interpreter or office suite cannot be remedied
/// here and fails with an install hint; everything else is created or
/// installed on the spot. Returns the converter executable path.
pub fn ensure_environment(config: &Config) -> Result<PathBuf> {
    ensure_python()?;
    ensure_venv(config)?;
    ensure_pip_current(config)?;
    let converter = ensure_converter(config)?;
    ensure_soffice()?;
    Ok(converter)
}

/// Verify the required interpreter is on PATH
fn ensure_python() -> Result<()> {
    which::which(PYTHON_BIN).map_err(|_| DeckError::ToolNotFound {
        tool: PYTHON_BIN.to_string(),
        hint: "Install it with: brew install python@3.12".to_string(),
    })?;
    Ok(())
}

/// Create the virtual environment if missing
fn ensure_venv(config: &Config) -> Result<()> {
    let venv = config.venv_dir();
    if !venv.is_dir() {
        info!("Creating virtual environment: {:?}", venv);
        run_tool(
            PYTHON_BIN,
            [OsStr::new("-m"), OsStr::new("venv"), venv.as_os_str()],
            config.base_dir(),
        )?;
    }
    Ok(())
}

/// Upgrade pip inside the venv
fn ensure_pip_current(config: &Config) -> Result<()> {
    let venv_python = config.venv_bin("python");
    run_tool(
        &venv_python,
        ["-m", "pip", "install", "--upgrade", "pip"],
        config.base_dir(),
    )?;
    Ok(())
}

/// Install or validate the HTML converter in the venv
fn ensure_converter(config: &Config) -> Result<PathBuf> {
    let converter = config.venv_bin(CONVERTER_BIN);
    if !converter.is_file() {
        info!("Installing {}...", CONVERTER_PACKAGE);
        let venv_pip = config.venv_bin("pip");
        run_tool(&venv_pip, ["install", CONVERTER_PACKAGE], config.base_dir())?;
    }
    if !converter.is_file() {
        return Err(DeckError::InstallError(format!(
            "{} not found in venv after install",
            CONVERTER_BIN
        )));
    }
    Ok(converter)
}

/// Verify the LibreOffice CLI is available for PDF export
fn ensure_soffice() -> Result<()> {
    which::which(SOFFICE_BIN).map_err(|_| DeckError::ToolNotFound {
        tool: format!("LibreOffice ({})", SOFFICE_BIN),
        hint: "Install it with: brew install --cask libreoffice".to_string(),
    })?;
    Ok(())
}
