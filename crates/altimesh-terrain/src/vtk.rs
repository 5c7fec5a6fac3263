//! Legacy VTK export for external renderers.
//!
//! Writes an ASCII `STRUCTURED_GRID` dataset: the mesh points, the altitude
//! scalars bound to a lookup table sampled from the ramp, the water mask,
//! and per-point colors already resolved through the ramp. Renderer settings
//! that the legacy format cannot carry go into a JSON [`RenderHints`] file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use altimesh_core::constants::LOOKUP_TABLE_SIZE;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::mesh::TerrainOutput;
use crate::ramp::ColorRamp;
use crate::Result;

/// Name of the lookup table section in the exported file.
const LOOKUP_TABLE_NAME: &str = "altitude_ramp";

/// Settings a renderer needs to install the ramp as its lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderHints {
    /// Scalar display range `[a, b]`.
    pub scalar_range: (f64, f64),
    /// Scalars below the range use the ramp's below-range color.
    pub use_below_range_color: bool,
    /// Structured dimensions `(width, height, 1)`.
    pub dimensions: [usize; 3],
    pub ramp: ColorRamp,
}

impl RenderHints {
    pub fn from_output(output: &TerrainOutput) -> Self {
        let (a, b) = output.mesh.altitude_range();
        Self {
            scalar_range: (a as f64, b as f64),
            use_below_range_color: true,
            dimensions: output.mesh.dimensions(),
            ramp: output.ramp.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the hints as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Write `output` as a legacy VTK file at `path`.
pub fn write_vtk(output: &TerrainOutput, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serialize_vtk(output, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), points = output.mesh.len(), "wrote VTK mesh");
    Ok(())
}

/// Serialize `output` as legacy ASCII VTK into any writer.
pub fn serialize_vtk<W: Write>(output: &TerrainOutput, out: &mut W) -> io::Result<()> {
    let mesh = &output.mesh;
    let ramp = &output.ramp;
    let [w, h, d] = mesh.dimensions();
    let n = mesh.len();

    writeln!(out, "# vtk DataFile Version 3.0")?;
    writeln!(out, "altimesh terrain")?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET STRUCTURED_GRID")?;
    writeln!(out, "DIMENSIONS {w} {h} {d}")?;

    writeln!(out, "POINTS {n} double")?;
    for p in mesh.points() {
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }

    writeln!(out, "POINT_DATA {n}")?;
    writeln!(out, "SCALARS altitude int 1")?;
    writeln!(out, "LOOKUP_TABLE {LOOKUP_TABLE_NAME}")?;
    for s in mesh.scalars() {
        writeln!(out, "{s}")?;
    }

    let table = ramp.lookup_table(LOOKUP_TABLE_SIZE);
    writeln!(out, "LOOKUP_TABLE {LOOKUP_TABLE_NAME} {}", table.len())?;
    for [r, g, b] in table {
        writeln!(out, "{r} {g} {b} 1")?;
    }

    writeln!(out, "SCALARS water unsigned_char 1")?;
    writeln!(out, "LOOKUP_TABLE default")?;
    for &wet in mesh.water_mask() {
        writeln!(out, "{}", u8::from(wet))?;
    }

    writeln!(out, "COLOR_SCALARS color 3")?;
    for &s in mesh.scalars() {
        let [r, g, b] = ramp.color_at(s as f64);
        writeln!(out, "{r} {g} {b}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::AltitudeGrid;
    use crate::mesh::TerrainMeshBuilder;
    use altimesh_core::constants::WATER_COLOR;
    use altimesh_core::MeshConfig;

    fn make_output() -> TerrainOutput {
        let grid = AltitudeGrid::from_rows(&[&[7, 7, 7], &[7, 7, 7], &[7, 20, 3000]]).unwrap();
        let builder = TerrainMeshBuilder::new(MeshConfig::with_dimensions(3, 3)).unwrap();
        builder.build(&grid)
    }

    fn render(output: &TerrainOutput) -> String {
        let mut buf = Vec::new();
        serialize_vtk(output, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_vtk_header_and_counts() {
        let output = make_output();
        let text = render(&output);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[3], "DATASET STRUCTURED_GRID");
        assert_eq!(lines[4], "DIMENSIONS 3 3 1");
        assert_eq!(lines[5], "POINTS 9 double");
        assert_eq!(lines[15], "POINT_DATA 9");
        assert!(text.contains(&format!("LOOKUP_TABLE altitude_ramp {LOOKUP_TABLE_SIZE}")));
        assert!(text.contains("SCALARS water unsigned_char 1"));
        assert!(text.contains("COLOR_SCALARS color 3"));
    }

    #[test]
    fn test_vtk_scalars_are_zeroed_water() {
        let output = make_output();
        let text = render(&output);
        let lines: Vec<&str> = text.lines().collect();
        let start = lines
            .iter()
            .position(|l| *l == "LOOKUP_TABLE altitude_ramp")
            .unwrap()
            + 1;
        let scalars: Vec<i32> = lines[start..start + 9]
            .iter()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(scalars, output.mesh.scalars());
        assert_eq!(scalars[0], 0);
    }

    #[test]
    fn test_vtk_water_color_resolved() {
        let output = make_output();
        let text = render(&output);
        let color_start = text.find("COLOR_SCALARS color 3\n").unwrap();
        let first_color = text[color_start..].lines().nth(1).unwrap();
        let water = WATER_COLOR.to_unit();
        assert_eq!(first_color, format!("{} {} {}", water[0], water[1], water[2]));
    }

    #[test]
    fn test_render_hints_json() {
        let output = make_output();
        let hints = RenderHints::from_output(&output);
        assert_eq!(hints.scalar_range, (7.0, 3000.0));
        assert!(hints.use_below_range_color);
        assert_eq!(hints.dimensions, [3, 3, 1]);

        let json = hints.to_json().unwrap();
        let back: RenderHints = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hints);
    }
}
