//! Coordinate conversion between device pixels and viewport units.
//!
//! Stroke geometry is stored in unit coordinates (0..1 of the viewport) so
//! it survives viewport resizes; overlays stay in device pixels. This
//! module is the only place the two spaces are converted for stroke data.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

/// A point in either device-pixel or viewport-unit space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the viewport has no drawable area yet.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Convert a device-pixel point to unit coordinates.
    ///
    /// Returns `None` while either viewport dimension is zero, so degenerate
    /// viewports never leak NaN into stored geometry.
    #[must_use]
    pub fn to_unit(&self, device: Point) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        Some(Point { x: device.x / self.width, y: device.y / self.height })
    }

    /// Convert a unit-coordinate point back to device pixels.
    #[must_use]
    pub fn to_device(&self, unit: Point) -> Point {
        Point { x: unit.x * self.width, y: unit.y * self.height }
    }
}
