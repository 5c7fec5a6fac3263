//! Error types for the terrain crate.

use altimesh_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading an altitude grid or exporting a mesh.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// I/O error reading the input or writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line has the wrong number of tokens.
    #[error("Line {line}: expected {expected} altitude values, found {found}")]
    Format {
        /// 1-based line number in the input (the header is line 1).
        line: usize,
        /// Configured grid width.
        expected: usize,
        /// Tokens present on the line.
        found: usize,
    },

    /// The input ended before every data line was read.
    #[error("Input truncated: expected {expected} data lines, found {found}")]
    Truncated {
        /// Configured grid height.
        expected: usize,
        /// Data lines actually present.
        found: usize,
    },

    /// A data line is not valid UTF-8.
    #[error("Line {line}: altitude values are not valid UTF-8")]
    Encoding {
        /// 1-based line number in the input.
        line: usize,
    },

    /// A token is not a valid integer altitude.
    #[error("Line {line}, value {column}: cannot parse {token:?} as an altitude")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// 1-based token position on the line.
        column: usize,
        /// Offending token.
        token: String,
    },

    /// A sample vector does not match the declared grid dimensions.
    #[error("Grid {width}x{height} needs {expected} samples, got {found}")]
    SampleCount {
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Length of the provided vector.
        found: usize,
    },

    /// Invalid pipeline configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Render hints could not be serialized.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
