// File: crates/chart-core/src/scale.rs
// Summary: Viewport and margin coordinate transforms (normalized units to surface units).

use crate::error::{ChartError, Result};
use crate::types::{CONTENT_FRACTION, MARGIN, VIEWPORT_EXTENT};

/// Mapping between plot coordinates and surface coordinates.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f64;
    fn to_screen_y(&self, y: f64) -> f64;
    fn from_screen_x(&self, px: f64) -> f64;
    fn from_screen_y(&self, py: f64) -> f64;
}

/// Maps the normalized 0..100 viewport onto a `width` x `height` surface and
/// confines [0,1] plot coordinates to the inner frame with Y pointing up.
///
/// Inputs outside [0,1] are not clamped; they plot outside the margin band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginScale {
    pub width: f64,
    pub height: f64,
}

impl MarginScale {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn to_viewport_x(&self, x: f64) -> f64 {
        x * self.width / VIEWPORT_EXTENT
    }

    #[inline]
    pub fn to_viewport_y(&self, y: f64) -> f64 {
        y * self.height / VIEWPORT_EXTENT
    }

    #[inline]
    pub fn to_margin_x(&self, x: f64) -> f64 {
        self.to_viewport_x(MARGIN + CONTENT_FRACTION * x * VIEWPORT_EXTENT)
    }

    #[inline]
    pub fn to_margin_y(&self, y: f64) -> f64 {
        // reflect about 0.5 so larger values sit higher
        let y = -(y - 0.5) + 0.5;
        self.to_viewport_y(MARGIN + CONTENT_FRACTION * y * VIEWPORT_EXTENT)
    }

    pub fn from_margin_x(&self, px: f64) -> f64 {
        let tick = px * VIEWPORT_EXTENT / self.width;
        (tick - MARGIN) / CONTENT_FRACTION / VIEWPORT_EXTENT
    }

    pub fn from_margin_y(&self, py: f64) -> f64 {
        let tick = py * VIEWPORT_EXTENT / self.height;
        1.0 - (tick - MARGIN) / CONTENT_FRACTION / VIEWPORT_EXTENT
    }
}

impl ScaleTransform for MarginScale {
    fn to_screen_x(&self, x: f64) -> f64 {
        self.to_margin_x(x)
    }
    fn to_screen_y(&self, y: f64) -> f64 {
        self.to_margin_y(y)
    }
    fn from_screen_x(&self, px: f64) -> f64 {
        self.from_margin_x(px)
    }
    fn from_screen_y(&self, py: f64) -> f64 {
        self.from_margin_y(py)
    }
}
