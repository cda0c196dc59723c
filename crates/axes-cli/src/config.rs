//! Configuration
//!
//! Loaded from TOML. Every section and field is optional; missing values take
//! the defaults below.
//!
//! ```toml
//! [search]
//! min_query_len = 3
//! orientation = "undirected"
//!
//! [logging]
//! profile = "development"
//! ```

use crate::error::{CliError, Result};
use crate::logging::Profile;
use axes_graph::EdgeOrientation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shortest trimmed query the caller forwards to the engine
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Search behaviour
    pub search: SearchConfig,
    /// Logging behaviour
    pub logging: LoggingConfig,
}

impl AxesConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`CliError::Config`] on malformed TOML or unknown values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`CliError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// With minimum query length
    #[inline]
    #[must_use]
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.search.min_query_len = len;
        self
    }

    /// With edge orientation
    #[inline]
    #[must_use]
    pub fn with_orientation(mut self, orientation: EdgeOrientation) -> Self {
        self.search.orientation = orientation;
        self
    }

    /// With logging profile
    #[inline]
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.logging.profile = profile;
        self
    }
}

/// `[search]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) leave the canvas unfiltered
    pub min_query_len: usize,
    /// Edge orientation used for traversal
    pub orientation: EdgeOrientation,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            orientation: EdgeOrientation::Undirected,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Subscriber profile
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(AxesConfig::from_toml_str("").unwrap(), AxesConfig::default());
    }

    #[test]
    fn full_file() {
        let config = AxesConfig::from_toml_str(
            r#"
            [search]
            min_query_len = 5
            orientation = "directed"

            [logging]
            profile = "production"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AxesConfig::new()
                .with_min_query_len(5)
                .with_orientation(EdgeOrientation::Directed)
                .with_profile(Profile::Production)
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AxesConfig::from_toml_str("[search]\norientation = \"directed\"\n").unwrap();
        assert_eq!(config.search.min_query_len, DEFAULT_MIN_QUERY_LEN);
        assert_eq!(config.logging.profile, Profile::Development);
    }

    #[test]
    fn unknown_orientation_rejected() {
        let err = AxesConfig::from_toml_str("[search]\norientation = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
