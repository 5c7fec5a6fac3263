//! AltitudeGrid: dense row-major altitude samples with index helpers.

use altimesh_core::ConfigError;

use crate::error::TerrainError;
use crate::Result;

/// Dense rectangular grid of altitude samples (meters).
///
/// Samples are row-major: column index varies fastest, so cell
/// `(col, row)` lives at `col + width * row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltitudeGrid {
    width: usize,
    height: usize,
    samples: Vec<i32>,
}

impl AltitudeGrid {
    /// Wrap a sample vector, checking it matches `width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<i32>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(ConfigError::GridTooLarge { width, height })?;
        if width == 0 || height == 0 || samples.len() != expected {
            return Err(TerrainError::SampleCount {
                width,
                height,
                expected,
                found: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid from rows of samples. Every row must have the same length.
    pub fn from_rows(rows: &[&[i32]]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(TerrainError::SampleCount {
                width,
                height,
                expected: width * height,
                found: rows.iter().map(|r| r.len()).sum(),
            });
        }
        let samples: Vec<i32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(width, height, samples)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples (`width * height`).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw samples in row-major order.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Linear offset of `(col, row)`.
    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> usize {
        col + self.width * row
    }

    /// `(col, row)` of a linear offset.
    #[inline]
    pub fn coords_of(&self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    /// Altitude at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<i32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.samples[self.index_of(col, row)])
    }

    /// Altitude at a linear offset. Panics if out of range.
    #[inline]
    pub fn at(&self, idx: usize) -> i32 {
        self.samples[idx]
    }

    /// Lowest and highest sample.
    pub fn altitude_range(&self) -> (i32, i32) {
        let min = self.samples.iter().copied().min().unwrap_or(0);
        let max = self.samples.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    /// Raise every sample below `floor` to `floor`. Returns how many changed.
    pub fn clamp_to(&mut self, floor: i32) -> usize {
        let mut changed = 0;
        for s in self.samples.iter_mut().filter(|s| **s < floor) {
            *s = floor;
            changed += 1;
        }
        changed
    }

    /// Consume the grid, returning its samples.
    pub fn into_samples(self) -> Vec<i32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_grid() -> AltitudeGrid {
        #[rustfmt::skip]
        let samples = vec![
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
        ];
        AltitudeGrid::new(4, 3, samples).unwrap()
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = make_test_grid();
        for idx in 0..grid.len() {
            let (col, row) = grid.coords_of(idx);
            assert_eq!(grid.index_of(col, row), idx);
        }
        assert_eq!(grid.coords_of(5), (1, 1));
        assert_eq!(grid.index_of(3, 2), 11);
    }

    #[test]
    fn test_get_is_column_fastest() {
        let grid = make_test_grid();
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(3, 0), Some(4));
        assert_eq!(grid.get(0, 1), Some(5));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_altitude_range() {
        let grid = make_test_grid();
        assert_eq!(grid.altitude_range(), (1, 12));
    }

    #[test]
    fn test_clamp_to_floor() {
        let mut grid = AltitudeGrid::from_rows(&[&[-10, 0, 5], &[-1, 3, -7]]).unwrap();
        let changed = grid.clamp_to(0);
        assert_eq!(changed, 3);
        assert_eq!(grid.samples(), &[0, 0, 5, 0, 3, 0]);
    }

    #[test]
    fn test_sample_count_mismatch() {
        let err = AltitudeGrid::new(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::SampleCount {
                expected: 9,
                found: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = AltitudeGrid::new(usize::MAX, 2, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::Config(ConfigError::GridTooLarge { height: 2, .. })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(AltitudeGrid::from_rows(&[&[1, 2], &[3]]).is_err());
        assert!(AltitudeGrid::from_rows(&[]).is_err());
    }
}
