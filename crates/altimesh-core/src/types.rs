//! Fundamental geographic and color types.

use serde::{Deserialize, Serialize};

/// Geographic extent of an altitude grid, in degrees.
///
/// Rows interpolate latitude from `min_lat`, columns interpolate longitude
/// from `min_lon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl GeoBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Latitude span (degrees). May be negative for inverted bounds.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span (degrees). May be negative for inverted bounds.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Center of the bounds as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_lat + self.lat_span() / 2.0,
            self.min_lon + self.lon_span() / 2.0,
        )
    }

    /// True when every bound is a finite number.
    pub fn is_finite(&self) -> bool {
        self.min_lat.is_finite()
            && self.max_lat.is_finite()
            && self.min_lon.is_finite()
            && self.max_lon.is_finite()
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`, the form color transfer functions take.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Inverse of [`Rgb::to_unit`], rounding and saturating each channel.
    pub fn from_unit(unit: [f64; 3]) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(unit[0]), channel(unit[1]), channel(unit[2]))
    }

    /// Per-channel linear interpolation, `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f64) -> [f64; 3] {
        let a = self.to_unit();
        let b = other.to_unit();
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
        ]
    }
}
