//! Immutable mesh configuration record.
//!
//! Every pipeline component receives the values it needs from a
//! [`MeshConfig`] at construction time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HEIGHT, DEFAULT_MAX_LAT, DEFAULT_MAX_LON, DEFAULT_MIN_LAT, DEFAULT_MIN_LON,
    DEFAULT_WIDTH, EARTH_RADIUS, FOREST_LIMIT, SNOW_LIMIT,
};
use crate::error::ConfigError;
use crate::types::GeoBounds;

/// Configuration consumed by the terrain mesh pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Samples per data line.
    pub width: usize,
    /// Number of data lines.
    pub height: usize,
    /// Geographic extent covered by the grid.
    pub bounds: GeoBounds,
    /// Reference sphere radius in meters.
    pub radius: f64,
    /// Minimum altitude every sample is clamped to. `None` disables clamping.
    pub sea_level: Option<i32>,
    /// Forest band upper limit (meters).
    pub forest_limit: f64,
    /// Snow band lower limit (meters).
    pub snow_limit: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bounds: GeoBounds::new(
                DEFAULT_MIN_LAT,
                DEFAULT_MAX_LAT,
                DEFAULT_MIN_LON,
                DEFAULT_MAX_LON,
            ),
            radius: EARTH_RADIUS,
            sea_level: None,
            forest_limit: FOREST_LIMIT,
            snow_limit: SNOW_LIMIT,
        }
    }
}

impl MeshConfig {
    /// Default configuration with explicit grid dimensions.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Number of samples in the configured grid, `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.sample_count().is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !self.bounds.is_finite() {
            return Err(ConfigError::NonFiniteBounds);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.forest_limit.is_finite() || !self.snow_limit.is_finite() {
            return Err(ConfigError::NonFiniteLimits {
                forest: self.forest_limit,
                snow: self.snow_limit,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MeshConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
