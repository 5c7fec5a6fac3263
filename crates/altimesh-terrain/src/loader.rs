//! Plain-text altitude grid loader.
//!
//! The input is one header line (ignored) followed by exactly `height`
//! lines of `width` whitespace-separated integer altitudes in meters.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use altimesh_core::{ConfigError, MeshConfig};
use tracing::{debug, info, warn};

use crate::error::TerrainError;
use crate::grid::AltitudeGrid;
use crate::Result;

/// Reads altitude grids of a fixed, known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltitudeGridLoader {
    width: usize,
    height: usize,
    sea_level: Option<i32>,
}

impl AltitudeGridLoader {
    /// Loader for a `width × height` grid with sea-level clamping disabled.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            sea_level: None,
        }
    }

    /// Loader configured from the grid dimensions and sea level of `config`.
    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.width, config.height).with_sea_level(config.sea_level)
    }

    /// Clamp every loaded sample up to `sea_level`, when set.
    pub fn with_sea_level(mut self, sea_level: Option<i32>) -> Self {
        self.sea_level = sea_level;
        self
    }

    /// Read a grid from a file on disk.
    pub fn load_path(&self, path: &Path) -> Result<AltitudeGrid> {
        let file = File::open(path)?;
        debug!(path = %path.display(), "reading altitude grid");
        self.load(BufReader::new(file))
    }

    /// Read a grid from an in-memory string.
    pub fn parse_str(&self, text: &str) -> Result<AltitudeGrid> {
        self.load(text.as_bytes())
    }

    /// Read a grid from any buffered source.
    ///
    /// The header line is skipped without decoding, so it may use any
    /// encoding. Data lines must be UTF-8.
    pub fn load<R: BufRead>(&self, mut reader: R) -> Result<AltitudeGrid> {
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(TerrainError::Truncated {
                expected: self.height,
                found: 0,
            });
        }

        let mut samples = Vec::new();
        for row in 0..self.height {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(TerrainError::Truncated {
                    expected: self.height,
                    found: row,
                });
            }
            // +1 for the header, +1 for 1-based numbering.
            let line_no = row + 2;
            let line =
                std::str::from_utf8(&buf).map_err(|_| TerrainError::Encoding { line: line_no })?;
            parse_line(line, line_no, self.width, &mut samples)?;
        }

        let mut trailing = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if !buf.iter().all(u8::is_ascii_whitespace) {
                trailing += 1;
            }
        }
        if trailing > 0 {
            warn!(trailing, "ignoring lines after the last expected data line");
        }

        let mut grid = AltitudeGrid::new(self.width, self.height, samples)?;
        if let Some(floor) = self.sea_level {
            let clamped = grid.clamp_to(floor);
            debug!(sea_level = floor, clamped, "clamped samples to sea level");
        }

        let (min, max) = grid.altitude_range();
        info!(
            width = self.width,
            height = self.height,
            min,
            max,
            "altitude grid loaded"
        );
        Ok(grid)
    }
}

/// Parse one data line of exactly `width` integers, appending to `out`.
///
/// `line_no` is the 1-based position of the line in the input and is only
/// used for error reporting.
pub fn parse_line(line: &str, line_no: usize, width: usize, out: &mut Vec<i32>) -> Result<()> {
    let found = line.split_whitespace().count();
    if found != width {
        return Err(TerrainError::Format {
            line: line_no,
            expected: width,
            found,
        });
    }

    out.reserve(width);
    for (i, token) in line.split_whitespace().enumerate() {
        let value = token.parse::<i32>().map_err(|_| TerrainError::Parse {
            line: line_no,
            column: i + 1,
            token: token.to_string(),
        })?;
        out.push(value);
    }
    Ok(())
}
