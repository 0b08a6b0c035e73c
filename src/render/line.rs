//! Point and line scan conversion.
//!
//! Both stepping algorithms snap the endpoints to the pixel grid first and
//! walk from the lexicographically smaller endpoint, so the pixel set of a
//! segment does not depend on which endpoint is passed first and always
//! contains both rounded endpoints.
//!
//! Every walk computes step `i` directly from the endpoints instead of
//! accumulating increments, so drawing onto a canvas only visits the steps
//! whose pixels can land on it.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::{PixelCoord, Point};

/// Line scan-conversion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlgorithm {
    /// Parametric stepping: `max(|dx|, |dy|)` equal increments on both axes.
    #[default]
    Incremental,
    /// Step the major axis by whole pixels and advance the minor axis by the
    /// slope (or its inverse for steep lines).
    SlopeClassified,
    /// Hand both endpoints to [`Canvas::draw_native_line`].
    Direct,
}

/// Write `color` at the pixel nearest to `position`.
///
/// Rounds half away from zero; positions outside the canvas (or not finite)
/// are ignored.
pub fn draw_point<C: Canvas + ?Sized>(canvas: &mut C, position: Point, color: Rgba) {
    if position.is_finite() {
        canvas.plot(position.to_pixel(), color);
    }
}

/// Draw a segment with the chosen algorithm.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    start: Point,
    end: Point,
    color: Rgba,
    algorithm: LineAlgorithm,
) {
    if !start.is_finite() || !end.is_finite() {
        return;
    }
    match algorithm {
        LineAlgorithm::Incremental => draw_line_incremental(canvas, start, end, color),
        LineAlgorithm::SlopeClassified => draw_line_slope(canvas, start, end, color),
        LineAlgorithm::Direct => draw_line_direct(canvas, start, end, color),
    }
}

/// Incremental parametric line.
///
/// Visits `max(|dx|, |dy|) + 1` pixels between the rounded endpoints; a
/// zero-length segment draws a single pixel.
pub fn draw_line_incremental<C: Canvas + ?Sized>(
    canvas: &mut C,
    start: Point,
    end: Point,
    color: Rgba,
) {
    if !start.is_finite() || !end.is_finite() {
        return;
    }
    let clip = Some((canvas.width(), canvas.height()));
    let (a, b) = (start.to_pixel(), end.to_pixel());
    walk_incremental(a, b, clip, |p| canvas.plot(p, color));
}

/// Slope-classified line.
///
/// Vertical segments step `y` directly. Otherwise, with `m = dy / dx`,
/// shallow lines (`|m| <= 1`) step `x` by one and advance `y` by `m`, steep
/// lines step `y` by one and advance `x` by `1 / |m|`.
pub fn draw_line_slope<C: Canvas + ?Sized>(canvas: &mut C, start: Point, end: Point, color: Rgba) {
    if !start.is_finite() || !end.is_finite() {
        return;
    }
    let clip = Some((canvas.width(), canvas.height()));
    let (a, b) = (start.to_pixel(), end.to_pixel());
    walk_slope(a, b, clip, |p| canvas.plot(p, color));
}

/// Draw through the canvas's native line primitive.
///
/// Only the two endpoints are handed over; the intermediate pixels are
/// whatever the canvas chooses.
pub fn draw_line_direct<C: Canvas + ?Sized>(canvas: &mut C, start: Point, end: Point, color: Rgba) {
    if start.is_finite() && end.is_finite() {
        canvas.draw_native_line(start, end, color);
    }
}

/// Pixels of a segment under `algorithm`, in walk order.
///
/// `Direct` has no fixed pixel set, so it reports the Bresenham walk the
/// default [`Canvas::draw_native_line`] would produce. The result holds one
/// entry per step of the whole segment; use [`line_pixels_within`] when only
/// the part on a canvas matters.
#[must_use]
pub fn line_pixels(start: Point, end: Point, algorithm: LineAlgorithm) -> Vec<PixelCoord> {
    let mut out = Vec::new();
    if start.is_finite() && end.is_finite() {
        let (a, b) = (start.to_pixel(), end.to_pixel());
        walk(a, b, algorithm, None, |p| out.push(p));
    }
    out
}

/// Pixels of a segment under `algorithm` that land on a `width x height`
/// canvas, in walk order.
///
/// Steps that cannot reach the canvas are skipped, so the cost depends on
/// the visible part of the segment only.
#[must_use]
pub fn line_pixels_within(
    start: Point,
    end: Point,
    algorithm: LineAlgorithm,
    width: u32,
    height: u32,
) -> Vec<PixelCoord> {
    let mut out = Vec::new();
    if !start.is_finite() || !end.is_finite() {
        return out;
    }
    let (a, b) = (start.to_pixel(), end.to_pixel());
    walk(a, b, algorithm, Some((width, height)), |p| {
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
            out.push(p);
        }
    });
    out
}

fn walk(
    a: PixelCoord,
    b: PixelCoord,
    algorithm: LineAlgorithm,
    clip: Option<(u32, u32)>,
    visit: impl FnMut(PixelCoord),
) {
    match algorithm {
        LineAlgorithm::Incremental => walk_incremental(a, b, clip, visit),
        LineAlgorithm::SlopeClassified => walk_slope(a, b, clip, visit),
        LineAlgorithm::Direct => walk_bresenham(a, b, clip, visit),
    }
}

/// Order endpoints so the walk always starts from the same end.
#[inline]
fn ordered(a: PixelCoord, b: PixelCoord) -> (PixelCoord, PixelCoord) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// `origin + delta * i / steps`, rounded to the nearest pixel.
#[inline]
fn lerp_px(origin: i32, delta: i64, i: u64, steps: u64) -> i32 {
    (f64::from(origin) + delta as f64 * i as f64 / steps as f64).round() as i32
}

/// `base + delta` for offsets that stay between the two endpoints.
#[inline]
fn offset(base: i32, delta: i64) -> i32 {
    (i64::from(base) + delta) as i32
}

/// Steps `i` in `0..=steps` where `origin + inc * i` lies in
/// `[-1, extent]` on one axis.
fn step_window(origin: f64, inc: f64, extent: u32, steps: u64) -> Option<(u64, u64)> {
    let (lo, hi, last) = (-1.0, f64::from(extent), steps as f64);
    let (first, end) = if inc == 0.0 {
        if origin < lo || origin > hi {
            return None;
        }
        (0.0, last)
    } else {
        let (t0, t1) = ((lo - origin) / inc, (hi - origin) / inc);
        (t0.min(t1).floor().max(0.0), t0.max(t1).ceil().min(last))
    };
    (first <= end).then_some((first as u64, end as u64))
}

/// First and last step of a `steps`-long walk from `a` by `delta` that can
/// land on a canvas of the given size. Every step when there is no canvas.
fn clip_steps(
    a: PixelCoord,
    delta: (i64, i64),
    steps: u64,
    clip: Option<(u32, u32)>,
) -> Option<(u64, u64)> {
    let Some((width, height)) = clip else {
        return Some((0, steps));
    };
    let n = steps as f64;
    let (x0, x1) = step_window(f64::from(a.x), delta.0 as f64 / n, width, steps)?;
    let (y0, y1) = step_window(f64::from(a.y), delta.1 as f64 / n, height, steps)?;
    let (first, last) = (x0.max(y0), x1.min(y1));
    (first <= last).then_some((first, last))
}

fn walk_incremental(
    a: PixelCoord,
    b: PixelCoord,
    clip: Option<(u32, u32)>,
    mut visit: impl FnMut(PixelCoord),
) {
    let (a, b) = ordered(a, b);
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);

    let steps = dx.unsigned_abs().max(dy.unsigned_abs());
    if steps == 0 {
        visit(a);
        return;
    }

    let Some((first, last)) = clip_steps(a, (dx, dy), steps, clip) else {
        return;
    };
    for i in first..=last {
        let p = PixelCoord::new(lerp_px(a.x, dx, i, steps), lerp_px(a.y, dy, i, steps));
        visit(p);
    }
}

fn walk_slope(
    a: PixelCoord,
    b: PixelCoord,
    clip: Option<(u32, u32)>,
    mut visit: impl FnMut(PixelCoord),
) {
    let (a, b) = ordered(a, b);
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);

    if dx == 0 && dy == 0 {
        visit(a);
        return;
    }

    if dx == 0 {
        let steps = dy.unsigned_abs();
        let Some((first, last)) = clip_steps(a, (0, dy), steps, clip) else {
            return;
        };
        for i in first..=last {
            visit(PixelCoord::new(a.x, offset(a.y, i as i64)));
        }
    } else if dy.unsigned_abs() > dx.unsigned_abs() {
        let steps = dy.unsigned_abs();
        let y_step = dy.signum();
        let Some((first, last)) = clip_steps(a, (dx, dy), steps, clip) else {
            return;
        };
        for i in first..=last {
            let p = PixelCoord::new(lerp_px(a.x, dx, i, steps), offset(a.y, y_step * i as i64));
            visit(p);
        }
    } else {
        let steps = dx.unsigned_abs();
        let Some((first, last)) = clip_steps(a, (dx, dy), steps, clip) else {
            return;
        };
        for i in first..=last {
            let p = PixelCoord::new(offset(a.x, i as i64), lerp_px(a.y, dy, i, steps));
            visit(p);
        }
    }
}

/// Integer midpoint walk from `a` to `b`, one pixel per major-axis step.
///
/// The minor coordinate at step `i` is `i * rise / run` rounded half up,
/// computed directly so any step range can be visited on its own.
pub(crate) fn walk_bresenham(
    a: PixelCoord,
    b: PixelCoord,
    clip: Option<(u32, u32)>,
    mut visit: impl FnMut(PixelCoord),
) {
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    let x_major = dx.unsigned_abs() >= dy.unsigned_abs();
    let (run, rise) = if x_major {
        (dx.unsigned_abs(), dy.unsigned_abs())
    } else {
        (dy.unsigned_abs(), dx.unsigned_abs())
    };
    if run == 0 {
        visit(a);
        return;
    }

    let Some((first, last)) = clip_steps(a, (dx, dy), run, clip) else {
        return;
    };
    let (sx, sy) = (dx.signum(), dy.signum());
    let (run, rise) = (i128::from(run), i128::from(rise));
    for i in first..=last {
        let along = i as i64;
        let across = ((2 * i128::from(i) * rise + run) / (2 * run)) as i64;
        let (ox, oy) = if x_major {
            (sx * along, sy * across)
        } else {
            (sx * across, sy * along)
        };
        visit(PixelCoord::new(offset(a.x, ox), offset(a.y, oy)));
    }
}
