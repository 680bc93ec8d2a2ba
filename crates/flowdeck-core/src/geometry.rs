//! Canvas geometry
//!
//! Positions are expressed in canvas coordinates (pre-transform). The camera
//! in `flowdeck-canvas` maps between screen space and canvas space.

use serde::{Deserialize, Serialize};

/// Fixed node footprint width on the canvas, in canvas units
pub const NODE_WIDTH: f64 = 200.0;

/// Fixed node footprint height on the canvas, in canvas units
pub const NODE_HEIGHT: f64 = 120.0;

/// A 2D point in canvas or screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise addition
    #[inline]
    #[must_use]
    pub fn offset(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction
    #[inline]
    #[must_use]
    pub fn minus(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Uniform scale
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Clamp both axes to non-negative values
    ///
    /// Node positions never go negative: dragging or dropping past the
    /// top-left corner pins the node to the canvas edge.
    #[inline]
    #[must_use]
    pub fn clamp_non_negative(self) -> Self {
        Self::new(self.x.max(0.0), self.y.max(0.0))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(10.0, 20.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(p.offset(q), Point::new(13.0, 24.0));
        assert_eq!(p.minus(q), Point::new(7.0, 16.0));
        assert_eq!(q.scale(2.0), Point::new(6.0, 8.0));
    }

    #[test]
    fn clamp_pins_to_origin() {
        let p = Point::new(-5.0, 12.0);
        assert_eq!(p.clamp_non_negative(), Point::new(0.0, 12.0));
        assert_eq!(Point::new(-1.0, -1.0).clamp_non_negative(), Point::ZERO);
    }

    #[test]
    fn point_serde_shape() {
        let json = serde_json::to_value(Point::new(1.5, 2.5)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.5, "y": 2.5}));
    }
}
