//! Geodetic projection: grid cell + altitude to a point on a reference sphere.
//!
//! Latitude is used as the polar angle (measured from the +z pole) and
//! longitude as the azimuth, so the mesh orientation matches a spherical
//! transform fed `(r, lat, lon)` directly.

use altimesh_core::{GeoBounds, MeshConfig};
use glam::DVec3;

/// Logical grid coordinate with its geographic position and altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub col: usize,
    pub row: usize,
    /// Degrees, interpolated from the row.
    pub lat: f64,
    /// Degrees, interpolated from the column.
    pub lon: f64,
    /// Meters above the reference sphere.
    pub altitude: f64,
}

/// Maps grid cells onto a sphere of fixed radius.
#[derive(Debug, Clone)]
pub struct GeodeticProjector {
    bounds: GeoBounds,
    radius: f64,
    /// Degrees of latitude per row.
    lat_step: f64,
    /// Degrees of longitude per column.
    lon_step: f64,
}

impl GeodeticProjector {
    /// Projector over a `width × height` grid covering `bounds`.
    pub fn new(bounds: GeoBounds, radius: f64, width: usize, height: usize) -> Self {
        Self {
            bounds,
            radius,
            lat_step: bounds.lat_span() / height as f64,
            lon_step: bounds.lon_span() / width as f64,
        }
    }

    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.bounds, config.radius, config.width, config.height)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// (lat, lon) in degrees of a grid cell.
    pub fn geographic(&self, col: usize, row: usize) -> (f64, f64) {
        let lat = self.bounds.min_lat + row as f64 * self.lat_step;
        let lon = self.bounds.min_lon + col as f64 * self.lon_step;
        (lat, lon)
    }

    /// Full geographic description of a cell at the given altitude.
    pub fn grid_point(&self, col: usize, row: usize, altitude: f64) -> GridPoint {
        let (lat, lon) = self.geographic(col, row);
        GridPoint {
            col,
            row,
            lat,
            lon,
            altitude,
        }
    }

    /// Cartesian position of a cell at the given altitude.
    pub fn project(&self, col: usize, row: usize, altitude: f64) -> DVec3 {
        let (lat, lon) = self.geographic(col, row);
        spherical_to_cartesian(self.radius + altitude, lat, lon)
    }

    /// Cartesian position of a [`GridPoint`].
    pub fn project_point(&self, point: &GridPoint) -> DVec3 {
        spherical_to_cartesian(self.radius + point.altitude, point.lat, point.lon)
    }
}

/// Spherical `(r, phi, theta)` to Cartesian, angles in degrees.
///
/// `phi` is the polar angle from +z, `theta` the azimuth from +x.
pub fn spherical_to_cartesian(r: f64, phi_deg: f64, theta_deg: f64) -> DVec3 {
    let phi = phi_deg.to_radians();
    let theta = theta_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

/// Inverse of [`spherical_to_cartesian`]: returns `(r, phi, theta)` with angles in degrees.
///
/// `phi` is in `0..=180`, `theta` in `-180..=180`. The origin maps to `(0, 0, 0)`.
pub fn cartesian_to_spherical(p: DVec3) -> (f64, f64, f64) {
    let r = p.length();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let phi = (p.z / r).clamp(-1.0, 1.0).acos();
    let theta = p.y.atan2(p.x);
    (r, phi.to_degrees(), theta.to_degrees())
}
