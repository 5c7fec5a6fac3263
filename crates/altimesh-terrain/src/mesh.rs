//! Structured terrain mesh construction.
//!
//! Pipeline: load → project every cell → classify water → build the color
//! ramp over the raw altitude range → zero water scalars.

use std::io::BufRead;
use std::path::Path;

use altimesh_core::MeshConfig;
use glam::DVec3;
use tracing::{debug, info};

use crate::grid::AltitudeGrid;
use crate::loader::AltitudeGridLoader;
use crate::projection::GeodeticProjector;
use crate::ramp::ColorRamp;
use crate::water::{classify_water, zero_water};
use crate::Result;

/// Structured surface mesh: one point and one scalar per grid cell.
///
/// Point `i` belongs to cell `(i % width, i / width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    width: usize,
    height: usize,
    points: Vec<DVec3>,
    scalars: Vec<i32>,
    water: Vec<bool>,
    altitude_range: (i32, i32),
}

impl TerrainMesh {
    /// Structured dimensions `(width, height, 1)`.
    pub fn dimensions(&self) -> [usize; 3] {
        [self.width, self.height, 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cartesian points in row-major, column-fastest order.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Altitude scalars with water cells set to zero.
    pub fn scalars(&self) -> &[i32] {
        &self.scalars
    }

    /// Per-cell water flags.
    pub fn water_mask(&self) -> &[bool] {
        &self.water
    }

    pub fn water_count(&self) -> usize {
        self.water.iter().filter(|&&w| w).count()
    }

    /// `(min, max)` of the altitudes before water zeroing.
    pub fn altitude_range(&self) -> (i32, i32) {
        self.altitude_range
    }
}

/// A finished mesh together with the ramp that colors it.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainOutput {
    pub mesh: TerrainMesh,
    pub ramp: ColorRamp,
}

/// Builds [`TerrainMesh`]es from altitude grids with a fixed configuration.
#[derive(Debug, Clone)]
pub struct TerrainMeshBuilder {
    config: MeshConfig,
    projector: GeodeticProjector,
}

impl TerrainMeshBuilder {
    /// Validate `config` and prepare the projector.
    pub fn new(config: MeshConfig) -> Result<Self> {
        config.validate()?;
        let projector = GeodeticProjector::from_config(&config);
        Ok(Self { config, projector })
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn projector(&self) -> &GeodeticProjector {
        &self.projector
    }

    /// Loader matching this builder's dimensions and sea level.
    pub fn loader(&self) -> AltitudeGridLoader {
        AltitudeGridLoader::from_config(&self.config)
    }

    /// Load a text grid from disk and build its mesh.
    pub fn build_from_path(&self, path: &Path) -> Result<TerrainOutput> {
        let grid = self.loader().load_path(path)?;
        Ok(self.build(&grid))
    }

    /// Load a text grid from a buffered reader and build its mesh.
    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> Result<TerrainOutput> {
        let grid = self.loader().load(reader)?;
        Ok(self.build(&grid))
    }

    /// Build the mesh and ramp for an already loaded grid.
    ///
    /// The grid's dimensions are taken from the grid itself; bounds, radius
    /// and band limits come from the configuration.
    pub fn build(&self, grid: &AltitudeGrid) -> TerrainOutput {
        let projector = if grid.width() == self.config.width && grid.height() == self.config.height
        {
            self.projector.clone()
        } else {
            GeodeticProjector::new(
                self.config.bounds,
                self.config.radius,
                grid.width(),
                grid.height(),
            )
        };

        let points: Vec<DVec3> = grid
            .samples()
            .iter()
            .enumerate()
            .map(|(idx, &alt)| {
                let (col, row) = grid.coords_of(idx);
                projector.project(col, row, alt as f64)
            })
            .collect();
        debug!(points = points.len(), "projected grid onto sphere");

        // Range comes from raw altitudes, before any water zeroing.
        let altitude_range = grid.altitude_range();
        let (a, b) = altitude_range;

        let water = classify_water(grid);
        let scalars = zero_water(grid, &water);
        let ramp = ColorRamp::from_config(&self.config, a, b);

        let mesh = TerrainMesh {
            width: grid.width(),
            height: grid.height(),
            points,
            scalars,
            water,
            altitude_range,
        };
        info!(
            points = mesh.len(),
            water = mesh.water_count(),
            min = a,
            max = b,
            "terrain mesh built"
        );

        TerrainOutput { mesh, ramp }
    }
}
