//! Core types and definitions for the altimesh terrain pipeline.
//!
//! This crate defines the vocabulary shared across the workspace:
//! geographic bounds, colors, domain constants and the immutable
//! mesh configuration record. It has no dependency on any renderer.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::MeshConfig;
pub use error::ConfigError;
pub use types::{GeoBounds, Rgb};

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
