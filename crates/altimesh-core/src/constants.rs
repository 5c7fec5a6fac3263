//! Domain constants and palette.

use crate::types::Rgb;

// --- Reference dataset ---

/// Default grid width (samples per line).
pub const DEFAULT_WIDTH: usize = 3001;

/// Default grid height (data lines).
pub const DEFAULT_HEIGHT: usize = 3001;

/// Default southern latitude bound (degrees).
pub const DEFAULT_MIN_LAT: f64 = 45.0;

/// Default northern latitude bound (degrees).
pub const DEFAULT_MAX_LAT: f64 = 47.5;

/// Default western longitude bound (degrees).
pub const DEFAULT_MIN_LON: f64 = 5.0;

/// Default eastern longitude bound (degrees).
pub const DEFAULT_MAX_LON: f64 = 7.5;

// --- Sphere ---

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_009.0;

// --- Altitude bands (meters above datum) ---

/// Upper limit of the forest band.
pub const FOREST_LIMIT: f64 = 1800.0;

/// Altitude from which terrain is fully snow-colored.
pub const SNOW_LIMIT: f64 = 2200.0;

/// Altitude written into the scalar array for water cells.
pub const WATER_ALTITUDE: i32 = 0;

// --- Palette ---

/// Color at the lowest observed altitude.
pub const FOREST_COLOR: Rgb = Rgb::new(53, 96, 48);

/// Color at the forest limit.
pub const TRANSITION_COLOR: Rgb = Rgb::new(237, 215, 187);

/// Color from the snow limit upward.
pub const SNOW_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Below-range color used for water scalars.
pub const WATER_COLOR: Rgb = Rgb::new(64, 61, 128);

// --- Export ---

/// Number of entries in a sampled lookup table.
pub const LOOKUP_TABLE_SIZE: usize = 256;
