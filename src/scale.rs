//! Planet scale: maps the qualitative size and gravity to tile dimensions.
//!
//! The tile plane spans the full equator horizontally (wrapping) and pole to
//! pole vertically, so height is half the width.

use crate::params::{Level, PlanetSize};

/// Tiles per km of circumference (a 40 000 km planet is 3072 tiles wide)
pub const TILES_PER_KM: f64 = 3072.0 / 40_000.0;

/// Minimum planet width, in chunks
const MIN_WIDTH_CHUNKS: usize = 4;

/// Tile dimensions and physical scale of a planet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetScale {
    /// Effective equatorial circumference after the gravity adjustment
    pub circumference_km: f64,
    /// Physical distance one tile represents (in kilometers)
    pub km_per_tile: f64,
    pub width: usize,
    pub height: usize,
}

impl PlanetScale {
    /// Compute dimensions for a size and gravity, aligning width to whole chunks.
    ///
    /// Heavier gravity means a smaller, denser planet; lighter gravity a larger one.
    pub fn new(size: PlanetSize, gravity: Level, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        let circumference_km = size.circumference_km() as f64 * gravity_size_factor(gravity);

        let raw_width = circumference_km * TILES_PER_KM;
        let chunks = ((raw_width / chunk_size as f64).round() as usize).max(MIN_WIDTH_CHUNKS);
        let width = chunks * chunk_size;
        let height = (width / 2).max(1);

        Self {
            circumference_km,
            km_per_tile: circumference_km / width as f64,
            width,
            height,
        }
    }

    /// Calculate the total map dimensions in kilometers
    pub fn map_size_km(&self) -> (f64, f64) {
        (self.width as f64 * self.km_per_tile, self.height as f64 * self.km_per_tile)
    }

    /// Format map size as a human-readable string
    pub fn format_map_size(&self) -> String {
        let (w_km, h_km) = self.map_size_km();
        if w_km >= 1000.0 {
            format!("{:.1} × {:.1} thousand km", w_km / 1000.0, h_km / 1000.0)
        } else {
            format!("{:.0} × {:.0} km", w_km, h_km)
        }
    }

    /// Get a descriptive name for this scale
    pub fn name(&self) -> &'static str {
        if self.circumference_km >= 55_000.0 {
            "Huge"
        } else if self.circumference_km >= 45_000.0 {
            "Large"
        } else if self.circumference_km >= 30_000.0 {
            "Medium"
        } else {
            "Small"
        }
    }
}

/// Circumference multiplier for a gravity level
pub fn gravity_size_factor(gravity: Level) -> f64 {
    gravity.pick([1.3, 1.15, 1.0, 0.87, 0.75])
}
