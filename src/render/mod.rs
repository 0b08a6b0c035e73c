//! Rasterization of geometric primitives onto a [`Canvas`](crate::canvas::Canvas).
//!
//! # Algorithms
//!
//! - **Incremental line**: parametric DDA with equal steps on both axes
//! - **Slope-classified line**: whole-pixel steps on the major axis
//! - **Direct line**: Bresenham, or whatever the canvas provides natively
//! - **Octant sampling**: circles and ellipses from one 45 degree arc
//! - **Seed fill**: 4-connected flood and boundary fills on an explicit stack
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Smith, A. R. (1979). "Tint Fill." SIGGRAPH '79.

mod curve;
mod fill;
mod line;
mod polyline;
mod rasterizer;

pub use curve::{draw_circle, draw_ellipse, octant_angles, stroke_ellipse};
pub use fill::{boundary_fill, flood_fill};
pub use line::{
    draw_line, draw_line_direct, draw_line_incremental, draw_line_slope, draw_point, line_pixels,
    line_pixels_within, LineAlgorithm,
};
pub use polyline::{draw_polygon, draw_polyline};
pub use rasterizer::Rasterizer;

pub(crate) use line::walk_bresenham;
