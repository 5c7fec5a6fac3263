//! mesh-prep: altitude grid → VTK terrain mesh, plus a synthetic grid generator.
//!
//! Usage:
//!   mesh-prep build --input altitudes.txt --output terrain.vtk [--config mesh.json]
//!   mesh-prep synthetic --output altitudes.txt --width 512 --height 512
//!   mesh-prep default-config > mesh.json

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use altimesh_core::MeshConfig;
use altimesh_terrain::{write_vtk, RenderHints, TerrainMeshBuilder};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mesh-prep")]
#[command(about = "Build colored terrain meshes from plain-text altitude grids")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a VTK structured-grid mesh from an altitude grid
    Build {
        /// Altitude grid: one header line, then rows of integers
        #[arg(long)]
        input: PathBuf,

        /// Output .vtk path
        #[arg(long)]
        output: PathBuf,

        /// JSON configuration (defaults to the reference dataset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Clamp every altitude to at least this value (meters)
        #[arg(long = "sea-level", allow_hyphen_values = true)]
        sea_level: Option<i32>,

        /// Also write renderer settings and the color ramp as JSON
        #[arg(long)]
        hints: Option<PathBuf>,
    },

    /// Generate a synthetic altitude grid for testing/demo
    Synthetic {
        /// Output text file
        #[arg(long, default_value = "altitudes_synth.txt")]
        output: PathBuf,

        /// Samples per line
        #[arg(long, default_value_t = 256)]
        width: usize,

        /// Number of data lines
        #[arg(long, default_value_t = 256)]
        height: usize,
    },

    /// Print the default configuration as JSON
    DefaultConfig,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,altimesh_terrain=info,mesh_prep=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    let result = match args.command {
        Command::Build {
            input,
            output,
            config,
            sea_level,
            hints,
        } => cmd_build(&input, &output, config.as_deref(), sea_level, hints.as_deref()),
        Command::Synthetic {
            output,
            width,
            height,
        } => cmd_synthetic(&output, width, height),
        Command::DefaultConfig => cmd_default_config(),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

// --- Build command ---

fn cmd_build(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    sea_level: Option<i32>,
    hints_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => MeshConfig::from_json_file(path)?,
        None => MeshConfig::default(),
    };
    if sea_level.is_some() {
        config.sea_level = sea_level;
    }

    info!(
        width = config.width,
        height = config.height,
        input = %input.display(),
        "building terrain mesh"
    );

    let builder = TerrainMeshBuilder::new(config)?;
    let terrain = builder.build_from_path(input)?;

    write_vtk(&terrain, output)?;
    if let Some(path) = hints_path {
        RenderHints::from_output(&terrain).write_json(path)?;
        info!(path = %path.display(), "wrote render hints");
    }

    let (a, b) = terrain.mesh.altitude_range();
    info!(
        "Done: {} points, {} water cells, altitude range {a}..{b}m",
        terrain.mesh.len(),
        terrain.mesh.water_count()
    );
    Ok(())
}

// --- Synthetic grid command ---

fn cmd_synthetic(output: &Path, width: usize, height: usize) -> Result<(), Box<dyn std::error::Error>> {
    if width == 0 || height == 0 {
        return Err(format!("grid dimensions must be positive, got {width}x{height}").into());
    }

    info!("Generating {width}×{height} synthetic altitude grid...");

    let mut out = BufWriter::new(File::create(output)?);
    writeln!(out, "ncols {width} nrows {height} synthetic")?;

    let mut min_elev = i32::MAX;
    let mut max_elev = i32::MIN;
    let mut line = String::new();
    for row in 0..height {
        line.clear();
        for col in 0..width {
            // Normalized coordinates (0..1); row 0 is the southern edge.
            let nx = col as f64 / width as f64;
            let ny = row as f64 / height as f64;
            let e = synthetic_elevation(nx, ny).round() as i32;
            min_elev = min_elev.min(e);
            max_elev = max_elev.max(e);

            if col > 0 {
                line.push(' ');
            }
            line.push_str(&e.to_string());
        }
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(
        "Wrote {} (altitude range {min_elev}..{max_elev}m)",
        output.display()
    );
    Ok(())
}

fn cmd_default_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&MeshConfig::default())?);
    Ok(())
}

/// Compute synthetic altitude at normalized coordinates.
/// nx: 0=west, 1=east. ny: 0=south, 1=north.
///
/// Produces:
/// - A flat sea along the south (exactly 0 m, so it reads as water)
/// - Coastal lowland rising northward
/// - An alpine ridge in the north reaching above the snow limit
/// - A flat lake basin in the lowland
fn synthetic_elevation(nx: f64, ny: f64) -> f64 {
    let shore = 0.2 + 0.04 * (nx * 9.0).sin() + 0.02 * (nx * 23.0).cos();
    if ny < shore {
        return 0.0;
    }

    let lake = ellipse_falloff(nx, ny, 0.3, 0.4, 0.08, 0.05);
    if lake > 0.0 {
        return 420.0;
    }

    let depth = (ny - shore) / (1.0 - shore);
    let base = 50.0 + depth * 900.0;
    let ridge = 2600.0 * smooth_step(ny, 0.6, 0.9) * (0.7 + 0.3 * (nx * 11.0).sin());
    let noise = 60.0 * ((nx * 40.0 + ny * 17.0).sin() * (ny * 31.0).cos());
    // Land never dips to sea level.
    (base + ridge + noise).max(1.0)
}

/// `1 - d²` inside the ellipse centered at (cx, cy) with semi-axes (rx, ry), else 0.
fn ellipse_falloff(nx: f64, ny: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> f64 {
    let dx = (nx - cx) / rx;
    let dy = (ny - cy) / ry;
    (1.0 - (dx * dx + dy * dy)).max(0.0)
}

/// Smooth step function: 0 when x < edge0, 1 when x > edge1, smooth between.
fn smooth_step(x: f64, edge0: f64, edge1: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_sea_is_flat() {
        assert_eq!(synthetic_elevation(0.5, 0.0), 0.0);
        assert_eq!(synthetic_elevation(0.1, 0.05), 0.0);
    }

    #[test]
    fn test_synthetic_lake_is_flat() {
        assert_eq!(synthetic_elevation(0.3, 0.4), 420.0);
        assert_eq!(synthetic_elevation(0.32, 0.41), 420.0);
    }

    #[test]
    fn test_synthetic_north_reaches_snow() {
        let peak = (0..100)
            .map(|i| synthetic_elevation(i as f64 / 100.0, 0.98))
            .fold(f64::MIN, f64::max);
        assert!(peak > 2200.0, "ridge should pass the snow limit, got {peak}");
    }

    #[test]
    fn test_cli_parses_build() {
        let args = Args::try_parse_from([
            "mesh-prep",
            "build",
            "--input",
            "a.txt",
            "--output",
            "a.vtk",
            "--sea-level",
            "-10",
        ])
        .unwrap();
        match args.command {
            Command::Build {
                sea_level, config, ..
            } => {
                assert_eq!(sea_level, Some(-10));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_synthetic_roundtrips_through_builder() {
        let path = std::env::temp_dir().join(format!("mesh-prep-synth-{}.txt", std::process::id()));
        cmd_synthetic(&path, 40, 30).unwrap();

        let builder = TerrainMeshBuilder::new(MeshConfig::with_dimensions(40, 30)).unwrap();
        let terrain = builder.build_from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(!path.exists());

        let terrain = terrain.unwrap();
        assert_eq!(terrain.mesh.len(), 1200);
        assert_eq!(terrain.mesh.altitude_range().0, 0);
        assert!(terrain.mesh.water_count() > 0);
    }
}
