//! Generator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::operations::creation::LandUseType;

/// Half side of the square emitted for a land-use cell.
pub const DEFAULT_LANDUSE_HALF_EXTENT: f64 = 50.0;

/// Settings shared by the builder operations and the exporter.
///
/// Missing fields take their defaults when loading from JSON.
///
/// # Example
///
/// ```
/// use lczcity::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_pretty_export(true);
/// assert!(config.pretty_export());
/// assert_eq!(config.landuse_half_extent(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    landuse_half_extent: f64,
    fallback_land_use: LandUseType,
    pretty_export: bool,
}

impl GeneratorConfig {
    /// Set the half side of generated land-use squares.
    ///
    /// The value is checked by [`GeneratorConfig::validate`] when a land-use
    /// square is built.
    #[must_use]
    pub fn with_landuse_half_extent(mut self, half_extent: f64) -> Self {
        self.landuse_half_extent = half_extent;
        self
    }

    /// Set the land-use type used for unrecognised class codes.
    #[must_use]
    pub fn with_fallback_land_use(mut self, land_use: LandUseType) -> Self {
        self.fallback_land_use = land_use;
        self
    }

    /// Indent exported documents.
    #[must_use]
    pub fn with_pretty_export(mut self, pretty: bool) -> Self {
        self.pretty_export = pretty;
        self
    }

    #[must_use]
    pub fn landuse_half_extent(&self) -> f64 {
        self.landuse_half_extent
    }

    #[must_use]
    pub fn fallback_land_use(&self) -> LandUseType {
        self.fallback_land_use
    }

    #[must_use]
    pub fn pretty_export(&self) -> bool {
        self.pretty_export
    }

    /// Checks that the settings describe a usable generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHalfExtent`] unless the land-use half
    /// extent is finite and greater than zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = self.landuse_half_extent;
        if h.is_finite() && h > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidHalfExtent(h))
        }
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input and
    /// [`ConfigError::InvalidHalfExtent`] for an unusable half extent.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`GeneratorConfig::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            landuse_half_extent: DEFAULT_LANDUSE_HALF_EXTENT,
            fallback_land_use: LandUseType::Grass,
            pretty_export: false,
        }
    }
}
