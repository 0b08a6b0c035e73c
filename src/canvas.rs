//! The pixel-buffer seam between the rasterizer and whoever owns the pixels.
//!
//! Rasterization only needs four things from a target: its size and
//! bounds-checked pixel get/set. Region fill additionally reads the whole
//! buffer once into a [`PixelSnapshot`], works on that copy and writes it
//! back in one [`Canvas::commit`].

use crate::color::Rgba;
use crate::geometry::{PixelCoord, Point};
use crate::render::walk_bresenham;

/// A mutable, addressable grid of pixels.
///
/// Implementors must reject out-of-bounds access: `get_pixel` returns `None`
/// and `set_pixel` does nothing. Nothing in this crate ever resizes a canvas.
pub trait Canvas {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `(x, y)`, or `None` outside the canvas.
    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba>;

    /// Write `color` at `(x, y)`; a no-op outside the canvas.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);

    /// Whether a signed pixel coordinate lies inside the canvas.
    fn contains(&self, p: PixelCoord) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height()
    }

    /// Write a pixel given signed coordinates, discarding anything outside.
    fn plot(&mut self, p: PixelCoord, color: Rgba) {
        if self.contains(p) {
            self.set_pixel(p.x as u32, p.y as u32, color);
        }
    }

    /// Copy the whole canvas into a detached buffer.
    fn snapshot(&self) -> PixelSnapshot {
        let (width, height) = (self.width(), self.height());
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(self.get_pixel(x, y).unwrap_or_default());
            }
        }
        PixelSnapshot::from_parts(width, height, pixels)
    }

    /// Write a snapshot back. Pixels of the snapshot that fall outside this
    /// canvas are dropped.
    fn commit(&mut self, snapshot: &PixelSnapshot) {
        let width = snapshot.width().min(self.width());
        let height = snapshot.height().min(self.height());
        for y in 0..height {
            for x in 0..width {
                if let Some(color) = snapshot.get_pixel(x, y) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// The canvas's own line primitive between two endpoints.
    ///
    /// The default is an integer Bresenham walk between the rounded
    /// endpoints, limited to the steps that can land on the canvas. Backends
    /// with a native line path can override this; the result only has to
    /// connect the same two endpoints.
    fn draw_native_line(&mut self, start: Point, end: Point, color: Rgba) {
        let clip = Some((self.width(), self.height()));
        let (a, b) = (start.to_pixel(), end.to_pixel());
        walk_bresenham(a, b, clip, |p| self.plot(p, color));
    }
}

/// A detached, tightly packed copy of a canvas's pixels.
///
/// Fill algorithms own one of these for the duration of a single call.
/// It is itself a [`Canvas`], so the same bounds rules apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelSnapshot {
    /// A snapshot of the given size filled with one color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self::from_parts(width, height, vec![color; width as usize * height as usize])
    }

    /// Assemble a snapshot from row-major pixels.
    ///
    /// `pixels` is truncated or padded with transparent black to exactly
    /// `width * height` entries.
    #[must_use]
    pub fn from_parts(width: u32, height: u32, mut pixels: Vec<Rgba>) -> Self {
        pixels.resize(width as usize * height as usize, Rgba::TRANSPARENT);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Row-major pixel slice.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Color at a signed coordinate, `None` outside.
    #[must_use]
    pub fn get(&self, p: PixelCoord) -> Option<Rgba> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Write at a signed coordinate. Returns `false` if it was outside.
    pub fn set(&mut self, p: PixelCoord, color: Rgba) -> bool {
        match self.index(p) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Number of pixels equal to `color`.
    #[must_use]
    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    #[inline]
    fn index(&self, p: PixelCoord) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }
}

impl Canvas for PixelSnapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    fn snapshot(&self) -> PixelSnapshot {
        self.clone()
    }

    fn commit(&mut self, snapshot: &PixelSnapshot) {
        if snapshot.width == self.width && snapshot.height == self.height {
            self.pixels.copy_from_slice(&snapshot.pixels);
        } else {
            let width = snapshot.width.min(self.width);
            let height = snapshot.height.min(self.height);
            for y in 0..height {
                for x in 0..width {
                    let src = y as usize * snapshot.width as usize + x as usize;
                    self.set_pixel(x, y, snapshot.pixels[src]);
                }
            }
        }
    }
}
