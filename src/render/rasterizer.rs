//! Method-call surface over a borrowed canvas.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::geometry::{Line, Point};

use super::{curve, fill, line, polyline, LineAlgorithm};

/// Draws primitives onto a canvas it borrows for its own lifetime.
///
/// Holds no state besides the borrow and a copy of the configuration, so
/// constructing one per frame (or per call) is free.
///
/// # Example
///
/// ```
/// use raster2d::prelude::*;
///
/// let mut fb = Framebuffer::filled(10, 10, Rgba::BLACK).unwrap();
/// let mut r = Rasterizer::new(&mut fb);
/// r.draw_polygon(
///     &[
///         Point::new(2.0, 2.0),
///         Point::new(7.0, 2.0),
///         Point::new(7.0, 7.0),
///         Point::new(2.0, 7.0),
///     ],
///     Rgba::WHITE,
/// );
/// r.boundary_fill(Point::new(4.0, 4.0), Rgba::RED, Rgba::WHITE);
/// assert_eq!(fb.get_pixel(4, 4), Some(Rgba::RED));
/// ```
#[derive(Debug)]
pub struct Rasterizer<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    config: RasterConfig,
}

impl<'a, C: Canvas + ?Sized> Rasterizer<'a, C> {
    /// Borrow `canvas` with the default configuration.
    pub fn new(canvas: &'a mut C) -> Self {
        Self::with_config(canvas, RasterConfig::default())
    }

    /// Borrow `canvas` with an explicit configuration.
    pub fn with_config(canvas: &'a mut C, config: RasterConfig) -> Self {
        Self { canvas, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Shared access to the target canvas.
    pub fn canvas(&self) -> &C {
        &*self.canvas
    }

    /// Exclusive access to the target canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut *self.canvas
    }

    /// See [`line::draw_point`].
    pub fn draw_point(&mut self, position: Point, color: Rgba) {
        line::draw_point(self.canvas, position, color);
    }

    /// Draw a segment with the configured line algorithm.
    pub fn draw_line(&mut self, start: Point, end: Point, color: Rgba) {
        line::draw_line(self.canvas, start, end, color, self.config.line_algorithm);
    }

    /// Draw a segment with an explicit algorithm, ignoring the configuration.
    pub fn draw_line_with(
        &mut self,
        start: Point,
        end: Point,
        color: Rgba,
        algorithm: LineAlgorithm,
    ) {
        line::draw_line(self.canvas, start, end, color, algorithm);
    }

    /// Draw a [`Line`] value with the configured algorithm.
    pub fn draw_segment(&mut self, segment: Line, color: Rgba) {
        self.draw_line(segment.start, segment.end, color);
    }

    /// See [`line::draw_line_direct`].
    pub fn draw_line_direct(&mut self, start: Point, end: Point, color: Rgba) {
        line::draw_line_direct(self.canvas, start, end, color);
    }

    /// See [`polyline::draw_polyline`].
    pub fn draw_polyline(&mut self, points: &[Point], color: Rgba) {
        polyline::draw_polyline(self.canvas, points, color, self.config.line_algorithm);
    }

    /// See [`polyline::draw_polygon`].
    pub fn draw_polygon(&mut self, points: &[Point], color: Rgba) {
        polyline::draw_polygon(self.canvas, points, color, self.config.line_algorithm);
    }

    /// See [`curve::draw_circle`].
    pub fn draw_circle(&mut self, center: Point, radius: f32, stroke: Rgba, fill: Rgba) {
        let step = self.config.curve_step_degrees;
        curve::draw_circle(self.canvas, center, radius, stroke, fill, step);
    }

    /// See [`curve::draw_ellipse`].
    pub fn draw_ellipse(&mut self, center: Point, rx: f32, ry: f32, stroke: Rgba, fill: Rgba) {
        let step = self.config.curve_step_degrees;
        curve::draw_ellipse(self.canvas, center, rx, ry, stroke, fill, step);
    }

    /// See [`fill::flood_fill`].
    pub fn flood_fill(&mut self, seed: Point, fill_color: Rgba, background: Rgba) {
        fill::flood_fill(self.canvas, seed, fill_color, background);
    }

    /// See [`fill::boundary_fill`].
    pub fn boundary_fill(&mut self, seed: Point, fill_color: Rgba, boundary: Rgba) {
        fill::boundary_fill(self.canvas, seed, fill_color, boundary);
    }
}
