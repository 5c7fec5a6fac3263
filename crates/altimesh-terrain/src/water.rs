//! Flat-region water detection.
//!
//! A cell is water when it and its eight neighbors all share exactly one
//! altitude. Neighborhoods are clamped at the grid border: edge cells reuse
//! their own row/column instead of wrapping. Genuinely flat land (plateaus,
//! sea-level clamped areas) is reported as water too.

use altimesh_core::constants::WATER_ALTITUDE;

use crate::grid::AltitudeGrid;

/// Clamped 3×3 neighborhood bounds of a cell, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub col_lo: usize,
    pub col_hi: usize,
    pub row_lo: usize,
    pub row_hi: usize,
}

impl Neighborhood {
    /// Neighborhood of `(col, row)` in a `width × height` grid.
    pub fn around(col: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            col_lo: col.saturating_sub(1),
            col_hi: (col + 1).min(width - 1),
            row_lo: row.saturating_sub(1),
            row_hi: (row + 1).min(height - 1),
        }
    }
}

/// Decide whether the cell at linear offset `idx` is water.
pub fn is_water_cell(grid: &AltitudeGrid, idx: usize) -> bool {
    let (col, row) = grid.coords_of(idx);
    let n = Neighborhood::around(col, row, grid.width(), grid.height());
    let altitude = grid.at(idx);

    // At the border lo/hi collapse onto the cell itself; those duplicate
    // fetches compare equal and are harmless.
    let neighbors = [
        (n.col_hi, n.row_lo),
        (n.col_hi, row),
        (n.col_hi, n.row_hi),
        (col, n.row_lo),
        (col, n.row_hi),
        (n.col_lo, n.row_lo),
        (n.col_lo, row),
        (n.col_lo, n.row_hi),
    ];

    neighbors
        .iter()
        .all(|&(c, r)| grid.at(grid.index_of(c, r)) == altitude)
}

/// Classify every cell. The result is parallel to the grid's samples.
pub fn classify_water(grid: &AltitudeGrid) -> Vec<bool> {
    (0..grid.len()).map(|idx| is_water_cell(grid, idx)).collect()
}

/// Scalar array with water cells replaced by [`WATER_ALTITUDE`].
///
/// Produces a new vector; `grid` is left untouched, so classification and
/// rewriting never observe each other.
pub fn zero_water(grid: &AltitudeGrid, water: &[bool]) -> Vec<i32> {
    grid.samples()
        .iter()
        .zip(water)
        .map(|(&alt, &wet)| if wet { WATER_ALTITUDE } else { alt })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[i32]]) -> AltitudeGrid {
        AltitudeGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_uniform_grid_is_all_water() {
        let g = grid(&[&[5, 5, 5], &[5, 5, 5], &[5, 5, 5]]);
        let water = classify_water(&g);
        assert!(water.iter().all(|&w| w));
        assert_eq!(zero_water(&g, &water), vec![0; 9]);
        // The source grid keeps its raw altitudes.
        assert_eq!(g.altitude_range(), (5, 5));
    }

    #[test]
    fn test_distinct_grid_has_no_water() {
        let g = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let water = classify_water(&g);
        assert!(water.iter().all(|&w| !w));
        assert_eq!(zero_water(&g, &water), g.samples());
    }

    #[test]
    fn test_strict_ramp_has_no_water() {
        let width = 12;
        let height = 9;
        let samples: Vec<i32> = (0..height)
            .flat_map(|r| (0..width).map(move |c| (c + 100 * r) as i32))
            .collect();
        let g = AltitudeGrid::new(width, height, samples).unwrap();
        assert_eq!(classify_water(&g).iter().filter(|&&w| w).count(), 0);
    }

    #[test]
    fn test_single_row_uses_clamped_edges() {
        // Column 0 and column 3 match each other but not their inner
        // neighbors; wrapping would wrongly compare them.
        let g = grid(&[&[7, 1, 2, 7]]);
        assert!(!is_water_cell(&g, 0));
        assert!(!is_water_cell(&g, 3));

        // Column 0 equals column 1 and nothing wraps in from the right edge.
        let g = grid(&[&[4, 4, 9, 9, 3]]);
        assert!(is_water_cell(&g, 0));
        assert!(!is_water_cell(&g, 1));
        assert!(!is_water_cell(&g, 4));
    }

    #[test]
    fn test_single_cell_grid_is_water() {
        let g = grid(&[&[42]]);
        assert_eq!(classify_water(&g), vec![true]);
    }

    #[test]
    fn test_lake_interior_only() {
        #[rustfmt::skip]
        let g = grid(&[
            &[9, 8, 7, 6, 5],
            &[8, 0, 0, 0, 4],
            &[7, 0, 0, 0, 3],
            &[6, 0, 0, 0, 2],
            &[5, 4, 3, 2, 1],
        ]);
        let water = classify_water(&g);
        let wet: Vec<usize> = (0..g.len()).filter(|&i| water[i]).collect();
        // Only the center of the 3×3 flat block has an all-flat neighborhood.
        assert_eq!(wet, vec![g.index_of(2, 2)]);
    }

    #[test]
    fn test_corner_flat_region() {
        #[rustfmt::skip]
        let g = grid(&[
            &[3, 3, 1],
            &[3, 3, 2],
            &[4, 5, 6],
        ]);
        let water = classify_water(&g);
        // (0,0) sees only the clamped 2×2 block of threes.
        assert!(water[g.index_of(0, 0)]);
        assert!(!water[g.index_of(1, 1)]);
    }

    #[test]
    fn test_classification_ignores_rewritten_scalars() {
        // A flat block of non-zero altitude: zeroing must not change the
        // classification of neighbors, since it reads the raw grid.
        let g = grid(&[&[2, 2, 2, 2], &[2, 2, 2, 2]]);
        let water = classify_water(&g);
        let scalars = zero_water(&g, &water);
        assert_eq!(classify_water(&g), water);
        assert!(scalars.iter().all(|&s| s == WATER_ALTITUDE));
    }

    #[test]
    fn test_neighborhood_clamps() {
        assert_eq!(
            Neighborhood::around(0, 0, 5, 1),
            Neighborhood {
                col_lo: 0,
                col_hi: 1,
                row_lo: 0,
                row_hi: 0
            }
        );
        assert_eq!(
            Neighborhood::around(4, 2, 5, 3),
            Neighborhood {
                col_lo: 3,
                col_hi: 4,
                row_lo: 1,
                row_hi: 2
            }
        );
    }
}
