//! Geometric primitives in canvas space.
//!
//! Points carry floating-point coordinates; rasterization snaps them to the
//! pixel grid with [`Point::to_pixel`], which rounds each axis independently
//! to the nearest integer with ties away from zero (`f32::round`).

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Nearest pixel, rounding half away from zero on each axis.
    ///
    /// Values beyond the `i32` range saturate, which keeps them outside any
    /// canvas.
    #[must_use]
    pub fn to_pixel(self) -> PixelCoord {
        PixelCoord::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Integer pixel coordinate.
///
/// Signed so that geometry running off the top/left edge stays representable
/// until the bounds check discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PixelCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelCoord {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent neighbours (right, left, down, up).
    #[must_use]
    pub fn neighbors4(self) -> [Self; 4] {
        [
            Self::new(self.x.saturating_add(1), self.y),
            Self::new(self.x.saturating_sub(1), self.y),
            Self::new(self.x, self.y.saturating_add(1)),
            Self::new(self.x, self.y.saturating_sub(1)),
        ]
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let p = Point::new(1.0, 2.0).translate(3.0, -4.0);
        assert_eq!(p, Point::new(4.0, -2.0));
    }

    #[test]
    fn test_to_pixel_rounds_nearest() {
        assert_eq!(Point::new(1.4, 1.6).to_pixel(), PixelCoord::new(1, 2));
        assert_eq!(Point::new(-0.4, -1.6).to_pixel(), PixelCoord::new(0, -2));
    }

    #[test]
    fn test_to_pixel_ties_away_from_zero() {
        assert_eq!(Point::new(2.5, -2.5).to_pixel(), PixelCoord::new(3, -3));
        assert_eq!(Point::new(0.5, -0.5).to_pixel(), PixelCoord::new(1, -1));
    }

    #[test]
    fn test_to_pixel_saturates() {
        let p = Point::new(1.0e12, f32::NEG_INFINITY).to_pixel();
        assert_eq!(p, PixelCoord::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_neighbors4() {
        let n = PixelCoord::new(5, 5).neighbors4();
        assert!(n.contains(&PixelCoord::new(6, 5)));
        assert!(n.contains(&PixelCoord::new(4, 5)));
        assert!(n.contains(&PixelCoord::new(5, 6)));
        assert!(n.contains(&PixelCoord::new(5, 4)));
    }

    #[test]
    fn test_line_from_coords() {
        let line = Line::from_coords(0.0, 1.0, 3.0, 4.0);
        assert_eq!(line, Line::new(Point::new(0.0, 1.0), Point::new(3.0, 4.0)));
        assert_eq!(line.end.to_pixel(), PixelCoord::new(3, 4));
    }
}
