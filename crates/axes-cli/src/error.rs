//! Error types for the command line layer
//!
//! Everything below the CLI is infallible apart from model construction and
//! canvas decoding; these errors cover reading the caller's inputs.

use axes_artifact::CanvasError;
use std::path::PathBuf;

/// Errors while loading inputs
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Canvas file is not a valid snapshot
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Configuration file is not valid TOML for [`crate::AxesConfig`]
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl CliError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for the CLI layer
pub type Result<T> = std::result::Result<T, CliError>;
