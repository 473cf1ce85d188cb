// ABOUTME: Configuration module for the deckconv application
// ABOUTME: Holds the deck directory and the fixed tool and naming conventions

use std::path::{Path, PathBuf};

/// Interpreter required to create the converter's virtualenv
pub const PYTHON_BIN: &str = "python3.12";

/// Virtualenv directory created inside the deck directory
pub const VENV_DIR: &str = ".venv-pptxhtml";

/// Executable the converter package installs into the venv
pub const CONVERTER_BIN: &str = "pptx-to-html";

/// Package that provides the HTML converter
pub const CONVERTER_PACKAGE: &str = "pptx-to-html5";

/// LibreOffice CLI used for PDF export
pub const SOFFICE_BIN: &str = "soffice";

/// Heading line that marks the regenerated README section
pub const SECTION_HEADING: &str = "## Presentations";

/// Directory prefix used when building README links
pub const LINK_PREFIX: &str = "presentations";

/// Office-suite lock-file marker on in-progress decks
pub const TEMP_PREFIX: &str = "~$";

/// Glob matching deck sources in the deck directory
pub const DECK_GLOB: &str = "*.pptx";

/// Global configuration for the application.
///
/// Everything hangs off the deck directory; no process-wide state is
/// mutated and no environment variables are consumed.
pub struct Config {
    base_dir: PathBuf,
}

impl Config {
    /// Create a configuration rooted at the given deck directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory containing the deck sources
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The virtualenv directory inside the deck directory
    pub fn venv_dir(&self) -> PathBuf {
        self.base_dir.join(VENV_DIR)
    }

    /// Resolve a binary path inside the venv
    pub fn venv_bin(&self, name: &str) -> PathBuf {
        self.venv_dir().join("bin").join(name)
    }

    /// The README lives one level above the deck directory
    pub fn readme_path(&self) -> PathBuf {
        self.base_dir.join("..").join("README.md")
    }

    /// HTML output directory for a deck stem
    pub fn html_output_dir(&self, stem: &str) -> PathBuf {
        self.base_dir.join(format!("{stem}_html"))
    }

    /// Optional links-fragment file associated with a deck stem
    pub fn links_fragment(&self, stem: &str) -> PathBuf {
        self.base_dir.join(format!("{stem}_links.md"))
    }
}
