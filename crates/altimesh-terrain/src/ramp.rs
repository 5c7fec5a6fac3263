//! Altitude to color transfer function.
//!
//! A piecewise-linear ramp over `[a, b]` with forest, transition and snow
//! bands, plus a distinguished below-range color for water scalars.

use altimesh_core::constants::{FOREST_COLOR, SNOW_COLOR, TRANSITION_COLOR, WATER_COLOR};
use altimesh_core::{MeshConfig, Rgb};
use serde::{Deserialize, Serialize};

/// One breakpoint of the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Altitude (meters).
    pub altitude: f64,
    pub color: Rgb,
}

/// Piecewise-linear altitude → RGB mapping.
///
/// Breakpoints are strictly increasing and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRamp {
    points: Vec<ControlPoint>,
    below_range: Rgb,
}

impl ColorRamp {
    /// Build the terrain ramp over the observed altitude range `[a, b]`.
    ///
    /// Breakpoints are clamped into `[a, b]`; a control point landing on the
    /// same altitude as the previously kept one is dropped, so the first
    /// point at a breakpoint wins.
    pub fn build(a: f64, b: f64, forest_limit: f64, snow_limit: f64) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let candidates = [
            (a, FOREST_COLOR),
            (forest_limit, TRANSITION_COLOR),
            (snow_limit, SNOW_COLOR),
            (b, SNOW_COLOR),
        ];

        let mut points: Vec<ControlPoint> = Vec::with_capacity(candidates.len());
        for (altitude, color) in candidates {
            if altitude.is_nan() {
                continue;
            }
            let altitude = altitude.clamp(a, b);
            if let Some(last) = points.last() {
                if altitude <= last.altitude {
                    continue;
                }
            }
            points.push(ControlPoint { altitude, color });
        }

        Self {
            points,
            below_range: WATER_COLOR,
        }
    }

    /// Ramp over `[a, b]` with the band limits of `config`.
    pub fn from_config(config: &MeshConfig, a: i32, b: i32) -> Self {
        Self::build(a as f64, b as f64, config.forest_limit, config.snow_limit)
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Color for scalars below the lowest breakpoint.
    pub fn below_range_color(&self) -> Rgb {
        self.below_range
    }

    /// Display range `(lowest, highest)` breakpoint.
    pub fn range(&self) -> (f64, f64) {
        let lo = self.points.first().map_or(0.0, |p| p.altitude);
        let hi = self.points.last().map_or(lo, |p| p.altitude);
        (lo, hi)
    }

    /// True when `value` resolves to the below-range color.
    pub fn is_below_range(&self, value: f64) -> bool {
        value < self.range().0
    }

    /// Unit RGB for an altitude scalar.
    ///
    /// Values above the highest breakpoint take the last color.
    pub fn color_at(&self, value: f64) -> [f64; 3] {
        let Some(first) = self.points.first() else {
            return self.below_range.to_unit();
        };
        if value < first.altitude {
            return self.below_range.to_unit();
        }

        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.altitude {
                let t = (value - lo.altitude) / (hi.altitude - lo.altitude);
                return lo.color.lerp(hi.color, t);
            }
        }

        self.points[self.points.len() - 1].color.to_unit()
    }

    /// 8-bit RGB for an altitude scalar.
    pub fn rgb_at(&self, value: f64) -> Rgb {
        Rgb::from_unit(self.color_at(value))
    }

    /// Sample `n` evenly spaced colors from the lowest to the highest breakpoint.
    pub fn lookup_table(&self, n: usize) -> Vec<[f64; 3]> {
        let (lo, hi) = self.range();
        match n {
            0 => Vec::new(),
            1 => vec![self.color_at(lo)],
            _ => (0..n)
                .map(|i| self.color_at(lo + (hi - lo) * i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}
