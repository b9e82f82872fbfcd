//! Error types for font loading and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a font into the library
#[derive(Debug, Error)]
pub enum FontError {
    #[error("no installed font matches family '{family}'")]
    FamilyNotFound { family: String },

    #[error("invalid font size {size} for '{family}'")]
    InvalidSize { family: String, size: f32 },

    #[error("failed to load font file {path}")]
    LoadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load style configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save style configuration")]
    Save(#[source] confy::ConfyError),
}
