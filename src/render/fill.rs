//! Seed-based region fill.
//!
//! Both fills grow a 4-connected region from a seed with an explicit stack,
//! so region size is bounded by canvas area rather than call-stack depth.
//! The canvas is read once into a [`PixelSnapshot`](crate::canvas::PixelSnapshot),
//! painted there, and committed back only if at least one pixel changed.
//!
//! Guard failures (seed off-canvas, seed already painted, seed not matching
//! the predicate) are silent no-ops.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::{PixelCoord, Point};

/// Replace the connected region of exactly `background` pixels containing
/// `seed` with `fill`.
///
/// No-op when the seed is off-canvas, already `fill`, or not `background`.
/// A region of mixed colors is never filled.
pub fn flood_fill<C: Canvas + ?Sized>(canvas: &mut C, seed: Point, fill: Rgba, background: Rgba) {
    let seed = seed.to_pixel();
    let Some(current) = seed_color(canvas, seed) else {
        log::debug!("flood fill skipped: seed {seed:?} outside canvas");
        return;
    };
    if current == fill {
        log::debug!("flood fill skipped: seed {seed:?} already has fill color");
        return;
    }
    if current != background {
        log::debug!("flood fill skipped: seed {seed:?} is {current:?}, not {background:?}");
        return;
    }

    let painted = fill_region(canvas, seed, fill, |c| c == background);
    log::trace!("flood fill from {seed:?} painted {painted} pixels");
}

/// Replace every pixel connected to `seed` that is neither `boundary` nor
/// `fill` with `fill`.
///
/// Unlike [`flood_fill`] the interior may hold any mix of colors. No-op when
/// the seed is off-canvas, on the boundary, or already `fill`.
pub fn boundary_fill<C: Canvas + ?Sized>(canvas: &mut C, seed: Point, fill: Rgba, boundary: Rgba) {
    let seed = seed.to_pixel();
    let Some(current) = seed_color(canvas, seed) else {
        log::debug!("boundary fill skipped: seed {seed:?} outside canvas");
        return;
    };
    if current == boundary {
        log::debug!("boundary fill skipped: seed {seed:?} lies on the boundary");
        return;
    }
    if current == fill {
        log::debug!("boundary fill skipped: seed {seed:?} already has fill color");
        return;
    }

    let painted = fill_region(canvas, seed, fill, |c| c != boundary && c != fill);
    log::trace!("boundary fill from {seed:?} painted {painted} pixels");
}

fn seed_color<C: Canvas + ?Sized>(canvas: &C, seed: PixelCoord) -> Option<Rgba> {
    if canvas.contains(seed) {
        canvas.get_pixel(seed.x as u32, seed.y as u32)
    } else {
        None
    }
}

/// Paint every pixel reachable from `seed` through pixels accepted by
/// `paintable`. `paintable(fill)` must be false or the walk never settles.
///
/// Neighbours are pushed unchecked and tested when popped, so a coordinate
/// can sit on the stack several times; once painted it fails the predicate.
fn fill_region<C: Canvas + ?Sized>(
    canvas: &mut C,
    seed: PixelCoord,
    fill: Rgba,
    paintable: impl Fn(Rgba) -> bool,
) -> usize {
    debug_assert!(!paintable(fill));

    let mut work = canvas.snapshot();
    let mut stack = vec![seed];
    let mut painted = 0usize;

    while let Some(p) = stack.pop() {
        match work.get(p) {
            Some(color) if paintable(color) => {}
            _ => continue,
        }

        work.set(p, fill);
        painted += 1;

        for n in p.neighbors4() {
            if work.contains(n) {
                stack.push(n);
            }
        }
    }

    if painted > 0 {
        canvas.commit(&work);
    }
    painted
}
