//! Terrain mesh construction for altimesh.
//!
//! Altitude grid loading, geodetic projection, flat-region water
//! detection, color ramps and VTK export.

pub use altimesh_core as core;

pub mod error;
pub mod grid;
pub mod loader;
pub mod mesh;
pub mod projection;
pub mod ramp;
pub mod vtk;
pub mod water;

// Re-export key types for convenience.
pub use error::TerrainError;
pub use grid::AltitudeGrid;
pub use loader::AltitudeGridLoader;
pub use mesh::{TerrainMesh, TerrainMeshBuilder, TerrainOutput};
pub use projection::{GeodeticProjector, GridPoint};
pub use ramp::{ColorRamp, ControlPoint};
pub use vtk::{write_vtk, RenderHints};
pub use water::{classify_water, is_water_cell, zero_water};

/// Result type for terrain operations.
pub type Result<T> = std::result::Result<T, TerrainError>;
