//! Error types for configuration handling.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::MeshConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for the expected schema.
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Grid dimensions must both be positive.
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// `width * height` does not fit in `usize`.
    #[error("Grid dimensions {width}x{height} overflow the sample count")]
    GridTooLarge {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// A geographic bound is NaN or infinite.
    #[error("Geographic bounds must be finite")]
    NonFiniteBounds,

    /// Forest or snow limit is NaN or infinite.
    #[error("Altitude band limits must be finite, got forest {forest} and snow {snow}")]
    NonFiniteLimits {
        /// Configured forest limit.
        forest: f64,
        /// Configured snow limit.
        snow: f64,
    },

    /// Sphere radius must be finite and positive.
    #[error("Reference radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}
