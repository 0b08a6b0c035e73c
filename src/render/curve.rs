//! Circle and ellipse rasterization.
//!
//! One 45 degree octant of the parametric curve is sampled at a fixed
//! angular step and mirrored eight ways, so trigonometry runs once per
//! sample instead of once per output pixel. Each outline is then filled
//! with a boundary fill seeded at the center and bounded by the stroke color.
//!
//! Closure is approximate: the outline has no gaps only while consecutive
//! samples land within one pixel of each other. At the default 0.1 degree
//! step that holds up to a radius of roughly 570 pixels; coarser steps or
//! larger radii leave gaps the fill can leak through.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::DEFAULT_CURVE_STEP_DEGREES;
use crate::geometry::Point;

use super::fill::boundary_fill;
use super::line::draw_point;

/// Draw a circle outline in `stroke` and fill its interior with `fill`.
pub fn draw_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    radius: f32,
    stroke: Rgba,
    fill: Rgba,
    step_degrees: f32,
) {
    draw_ellipse(canvas, center, radius, radius, stroke, fill, step_degrees);
}

/// Draw an axis-aligned ellipse outline in `stroke` and fill its interior
/// with `fill`. `rx` is the horizontal semi-axis, `ry` the vertical one.
pub fn draw_ellipse<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    rx: f32,
    ry: f32,
    stroke: Rgba,
    fill: Rgba,
    step_degrees: f32,
) {
    if !center.is_finite() || !rx.is_finite() || !ry.is_finite() {
        return;
    }
    stroke_ellipse(canvas, center, rx, ry, stroke, step_degrees);
    boundary_fill(canvas, center, fill, stroke);
}

/// Draw only the outline of an axis-aligned ellipse.
pub fn stroke_ellipse<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    rx: f32,
    ry: f32,
    color: Rgba,
    step_degrees: f32,
) {
    let (rx, ry) = (f64::from(rx), f64::from(ry));
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));

    for angle in octant_angles(step_degrees) {
        let (sin_a, cos_a) = angle.to_radians().sin_cos();

        // Parameter angles a and 90 - a cover the first quadrant.
        for (ox, oy) in [(rx * cos_a, ry * sin_a), (rx * sin_a, ry * cos_a)] {
            for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
                let p = Point::new((cx + sx * ox) as f32, (cy + sy * oy) as f32);
                draw_point(canvas, p, color);
            }
        }
    }
}

/// Sample angles in degrees from 0 to 45 inclusive.
///
/// A step that is not a positive finite number falls back to the default;
/// steps above 45 degrees are clamped so both octant ends are sampled.
pub fn octant_angles(step_degrees: f32) -> impl Iterator<Item = f64> {
    let step = if step_degrees.is_finite() && step_degrees > 0.0 {
        f64::from(step_degrees.min(45.0))
    } else {
        f64::from(DEFAULT_CURVE_STEP_DEGREES)
    };

    let n = (45.0 / step).floor() as u64;
    let last = n as f64 * step;
    let tail = (45.0 - last > 1e-9).then_some(45.0);

    (0..=n).map(move |i| (i as f64 * step).min(45.0)).chain(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelSnapshot;

    #[test]
    fn test_octant_angles_cover_both_ends() {
        let angles: Vec<f64> = octant_angles(0.1).collect();
        assert_eq!(angles.first().copied(), Some(0.0));
        assert!((angles.last().copied().unwrap() - 45.0).abs() < 1e-6);
        assert!(angles.len() >= 450);
    }

    #[test]
    fn test_octant_angles_uneven_step() {
        let angles: Vec<f64> = octant_angles(20.0).collect();
        assert_eq!(angles, vec![0.0, 20.0, 40.0, 45.0]);
    }

    #[test]
    fn test_octant_angles_bad_step_falls_back() {
        let fallback = octant_angles(0.0).count();
        assert_eq!(fallback, octant_angles(DEFAULT_CURVE_STEP_DEGREES).count());
        assert_eq!(octant_angles(f32::NAN).count(), fallback);
        assert_eq!(octant_angles(90.0).collect::<Vec<_>>(), vec![0.0, 45.0]);
    }

    #[test]
    fn test_circle_outline_hits_axis_extremes() {
        let mut canvas = PixelSnapshot::filled(100, 100, Rgba::WHITE);
        let center = Point::new(50.0, 50.0);
        stroke_ellipse(&mut canvas, center, 20.0, 20.0, Rgba::GREEN, 0.1);

        assert_eq!(canvas.get_pixel(70, 50), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(30, 50), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(50, 70), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(50, 30), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(50, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_circle_is_filled_and_closed() {
        let mut canvas = PixelSnapshot::filled(100, 100, Rgba::WHITE);
        let center = Point::new(50.0, 50.0);
        draw_circle(&mut canvas, center, 20.0, Rgba::BLACK, Rgba::BLUE, 0.1);

        assert_eq!(canvas.get_pixel(50, 50), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(60, 60), Some(Rgba::BLUE));
        // Fill must not escape the outline.
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(50, 75), Some(Rgba::WHITE));
        let area = canvas.count(Rgba::BLUE) as f64;
        assert!(area > 1000.0 && area < 1300.0, "interior area {area}");
    }

    #[test]
    fn test_ellipse_axes() {
        let mut canvas = PixelSnapshot::filled(120, 120, Rgba::WHITE);
        draw_ellipse(
            &mut canvas,
            Point::new(60.0, 60.0),
            40.0,
            15.0,
            Rgba::RED,
            Rgba::YELLOW,
            0.1,
        );

        assert_eq!(canvas.get_pixel(100, 60), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(20, 60), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(60, 75), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(60, 45), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(90, 60), Some(Rgba::YELLOW));
        assert_eq!(canvas.get_pixel(60, 35), Some(Rgba::WHITE));
    }

    #[test]
    fn test_same_stroke_and_fill_color() {
        let mut canvas = PixelSnapshot::filled(60, 60, Rgba::BLACK);
        let center = Point::new(30.0, 30.0);
        draw_circle(&mut canvas, center, 10.0, Rgba::GREEN, Rgba::GREEN, 0.1);
        assert_eq!(canvas.get_pixel(30, 30), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_zero_radius_is_single_pixel() {
        let mut canvas = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let center = Point::new(4.0, 4.0);
        draw_circle(&mut canvas, center, 0.0, Rgba::WHITE, Rgba::RED, 0.1);
        assert_eq!(canvas.count(Rgba::WHITE), 1);
        assert_eq!(canvas.count(Rgba::RED), 0);
    }

    #[test]
    fn test_center_off_canvas_still_strokes_visible_part() {
        let mut canvas = PixelSnapshot::filled(30, 30, Rgba::BLACK);
        let center = Point::new(-5.0, 15.0);
        draw_circle(&mut canvas, center, 10.0, Rgba::WHITE, Rgba::RED, 0.1);
        assert_eq!(canvas.get_pixel(5, 15), Some(Rgba::WHITE));
        // Seed is off-canvas, so no fill happens.
        assert_eq!(canvas.count(Rgba::RED), 0);
    }

    #[test]
    fn test_non_finite_radius_is_noop() {
        let mut canvas = PixelSnapshot::filled(10, 10, Rgba::BLACK);
        let before = canvas.clone();
        draw_ellipse(
            &mut canvas,
            Point::new(5.0, 5.0),
            f32::NAN,
            3.0,
            Rgba::WHITE,
            Rgba::RED,
            0.1,
        );
        assert_eq!(canvas, before);
    }
}
