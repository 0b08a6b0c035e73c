//! Open and closed polylines composed from line segments.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::Point;

use super::line::{draw_line, LineAlgorithm};

/// Draw a segment between each consecutive pair of `points`, in order.
///
/// Fewer than two points draws nothing.
pub fn draw_polyline<C: Canvas + ?Sized>(
    canvas: &mut C,
    points: &[Point],
    color: Rgba,
    algorithm: LineAlgorithm,
) {
    for pair in points.windows(2) {
        draw_line(canvas, pair[0], pair[1], color, algorithm);
    }
}

/// Draw a polyline plus a closing edge from the last point to the first.
///
/// Fewer than two points draws nothing.
pub fn draw_polygon<C: Canvas + ?Sized>(
    canvas: &mut C,
    points: &[Point],
    color: Rgba,
    algorithm: LineAlgorithm,
) {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return;
    };
    if points.len() < 2 {
        return;
    }
    draw_polyline(canvas, points, color, algorithm);
    draw_line(canvas, last, first, color, algorithm);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelSnapshot;

    fn square() -> Vec<Point> {
        vec![
            Point::new(2.0, 2.0),
            Point::new(7.0, 2.0),
            Point::new(7.0, 7.0),
            Point::new(2.0, 7.0),
        ]
    }

    #[test]
    fn test_degenerate_inputs_are_noops() {
        let mut canvas = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let before = canvas.clone();
        let one = [Point::new(3.0, 3.0)];
        draw_polyline(&mut canvas, &[], Rgba::WHITE, LineAlgorithm::Incremental);
        draw_polyline(&mut canvas, &one, Rgba::WHITE, LineAlgorithm::Incremental);
        draw_polygon(&mut canvas, &[], Rgba::WHITE, LineAlgorithm::Incremental);
        draw_polygon(&mut canvas, &one, Rgba::WHITE, LineAlgorithm::Incremental);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_polyline_leaves_gap() {
        let mut canvas = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let pts = square();
        draw_polyline(&mut canvas, &pts, Rgba::WHITE, LineAlgorithm::Incremental);
        // Three sides of 6 pixels sharing two corners.
        assert_eq!(canvas.count(Rgba::WHITE), 16);
        assert_eq!(canvas.get_pixel(2, 4), Some(Rgba::BLACK));
    }

    #[test]
    fn test_polygon_closes() {
        let mut canvas = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let pts = square();
        draw_polygon(&mut canvas, &pts, Rgba::WHITE, LineAlgorithm::Incremental);
        assert_eq!(canvas.count(Rgba::WHITE), 20);
        assert_eq!(canvas.get_pixel(2, 4), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(4, 4), Some(Rgba::BLACK));
    }

    #[test]
    fn test_two_point_polygon_is_a_segment() {
        let pts = [Point::new(1.0, 1.0), Point::new(8.0, 4.0)];
        let mut line = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let mut poly = line.clone();
        draw_polyline(&mut line, &pts, Rgba::WHITE, LineAlgorithm::Incremental);
        draw_polygon(&mut poly, &pts, Rgba::WHITE, LineAlgorithm::Incremental);
        assert_eq!(line, poly);
    }
}
