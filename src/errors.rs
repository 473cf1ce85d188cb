// ABOUTME: Error types for the deckconv application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("{tool} not found. {hint}")]
    ToolNotFound { tool: String, hint: String },

    #[error("Failed to launch `{tool}`: {source}")]
    ToolLaunchError {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{tool}` failed with {status}{diagnostics}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        diagnostics: String,
    },

    #[error("Install error: {0}")]
    InstallError(String),

    #[error("README not found at {0:?}")]
    ReadmeNotFoundError(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    GlobError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
