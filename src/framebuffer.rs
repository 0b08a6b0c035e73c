//! Owned RGBA pixel buffer.
//!
//! `Framebuffer` is the default [`Canvas`] implementation: row-major RGBA8
//! with rows padded to a 64-byte stride. Pixel data goes in and out as
//! tightly packed RGBA bytes; file formats are left to the caller.

use std::ops::Range;

use crate::canvas::{Canvas, PixelSnapshot};
use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Bytes per pixel.
const BPP: usize = 4;

/// RGBA framebuffer with aligned rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Row-major RGBA bytes, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Row length in bytes, padding included.
    stride: usize,
}

impl Framebuffer {
    /// Create a framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster2d::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let stride = (width as usize * BPP).next_multiple_of(ROW_ALIGNMENT);
        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * height as usize],
            stride,
        })
    }

    /// Create a blank framebuffer filled with one color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        fb.clear(color);
        Ok(fb)
    }

    /// Build a framebuffer from tightly packed RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension and
    /// [`Error::BufferLengthMismatch`] unless `data.len()` is
    /// `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        let expected = fb.packed_row_len() * height as usize;
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        for (y, src) in data.chunks_exact(fb.packed_row_len()).enumerate() {
            let range = fb.row_range(y);
            fb.pixels[range].copy_from_slice(src);
        }
        Ok(fb)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height as usize {
            let range = self.row_range(y);
            for px in self.pixels[range].chunks_exact_mut(BPP) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.byte_index(x, y)?;
        let px: [u8; 4] = self.pixels[i..i + BPP].try_into().ok()?;
        Some(Rgba::from_array(px))
    }

    /// Write `color` at `(x, y)`; ignored outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.byte_index(x, y) {
            self.pixels[i..i + BPP].copy_from_slice(&color.to_array());
        }
    }

    /// Count pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.rows()
            .flat_map(|row| row.chunks_exact(BPP))
            .filter(|px| px[..] == rgba[..])
            .count()
    }

    /// Pixel data as tightly packed RGBA8, padding stripped.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        if self.stride == self.packed_row_len() {
            return self.pixels.clone();
        }
        self.rows().flatten().copied().collect()
    }

    fn packed_row_len(&self) -> usize {
        self.width as usize * BPP
    }

    fn row_range(&self, y: usize) -> Range<usize> {
        let start = y * self.stride;
        start..start + self.packed_row_len()
    }

    fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height as usize).map(|y| &self.pixels[self.row_range(y)])
    }

    fn byte_index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.stride + x as usize * BPP)
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        Framebuffer::get_pixel(self, x, y)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        Framebuffer::set_pixel(self, x, y, color);
    }

    fn snapshot(&self) -> PixelSnapshot {
        let pixels = self
            .rows()
            .flat_map(|row| row.chunks_exact(BPP))
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        PixelSnapshot::from_parts(self.width, self.height, pixels)
    }

    fn commit(&mut self, snapshot: &PixelSnapshot) {
        let width = snapshot.width().min(self.width) as usize;
        let height = snapshot.height().min(self.height) as usize;
        let row_len = snapshot.width().max(1) as usize;
        let src_rows = snapshot.pixels().chunks_exact(row_len);

        for (y, src) in src_rows.take(height).enumerate() {
            let range = self.row_range(y);
            let dst = self.pixels[range].chunks_exact_mut(BPP);
            for (px, color) in dst.zip(&src[..width]) {
                px.copy_from_slice(&color.to_array());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert!(fb.stride >= 400);
        assert_eq!(fb.stride % ROW_ALIGNMENT, 0);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.count_color(Rgba::TRANSPARENT), 5000);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::filled(0, 0, Rgba::RED).is_err());
    }

    #[test]
    fn test_filled_and_clear() {
        let mut fb = Framebuffer::filled(10, 10, Rgba::RED).unwrap();
        assert_eq!(fb.count_color(Rgba::RED), 100);
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::RED));

        fb.clear(Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 100);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_padding_is_not_counted() {
        // 3 px rows are 12 bytes of a 64-byte stride; the rest must stay invisible.
        let fb = Framebuffer::new(3, 2).unwrap();
        assert_eq!(fb.count_color(Rgba::TRANSPARENT), 6);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.get_pixel(10, 0), None);
        fb.set_pixel(10, 0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 1);
    }

    #[test]
    fn test_rgba_bytes_roundtrip_through_padding() {
        let data: Vec<u8> = (0..3 * 2 * 4).map(|i| i as u8).collect();
        let fb = Framebuffer::from_rgba_bytes(3, 2, &data).unwrap();
        assert_eq!(fb.stride, 64);
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::new(16, 17, 18, 19)));
        assert_eq!(fb.to_rgba_bytes(), data);
    }

    #[test]
    fn test_rgba_bytes_without_padding() {
        // 16 px rows fill the 64-byte stride exactly.
        let fb = Framebuffer::filled(16, 2, Rgba::CYAN).unwrap();
        assert_eq!(fb.stride, 64);
        let bytes = fb.to_rgba_bytes();
        assert_eq!(bytes.len(), 16 * 2 * 4);
        assert_eq!(bytes[..4], Rgba::CYAN.to_array());
    }

    #[test]
    fn test_from_rgba_bytes_length_mismatch() {
        let err = Framebuffer::from_rgba_bytes(2, 2, &[0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferLengthMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_snapshot_commit_roundtrip() {
        let mut fb = Framebuffer::filled(7, 5, Rgba::BLACK).unwrap();
        fb.set_pixel(6, 4, Rgba::GREEN);

        let mut snap = Canvas::snapshot(&fb);
        assert_eq!(snap.get_pixel(6, 4), Some(Rgba::GREEN));

        snap.set_pixel(0, 0, Rgba::RED);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));

        fb.commit(&snap);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(6, 4), Some(Rgba::GREEN));
    }

    #[test]
    fn test_commit_mismatched_sizes() {
        let mut fb = Framebuffer::filled(4, 4, Rgba::BLACK).unwrap();
        fb.commit(&PixelSnapshot::filled(2, 3, Rgba::RED));
        assert_eq!(fb.count_color(Rgba::RED), 6);
        assert_eq!(fb.get_pixel(2, 0), Some(Rgba::BLACK));

        fb.commit(&PixelSnapshot::filled(9, 9, Rgba::BLUE));
        assert_eq!(fb.count_color(Rgba::BLUE), 16);

        fb.commit(&PixelSnapshot::filled(0, 0, Rgba::RED));
        assert_eq!(fb.count_color(Rgba::BLUE), 16);
    }
}
