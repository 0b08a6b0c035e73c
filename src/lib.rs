//! # raster2d
//!
//! Software rasterization of 2D primitives onto RGBA pixel buffers.
//!
//! Points, lines, polylines, polygons, circles and ellipses are scan-converted
//! onto any [`Canvas`](canvas::Canvas); regions are filled with 4-connected
//! flood or boundary fills. Out-of-canvas geometry is clipped silently and
//! rasterization never fails.
//!
//! ## Features
//!
//! - **Pure Rust**: no platform graphics API required
//! - **Pluggable target**: draw on the bundled [`Framebuffer`](framebuffer::Framebuffer)
//!   or implement [`Canvas`](canvas::Canvas) for your own surface
//! - **Selectable line algorithms**: incremental, slope-classified, or native
//! - **Per-frame command lists**: queue primitives and flush them in order
//!
//! ## Quick Start
//!
//! ```rust
//! use raster2d::prelude::*;
//!
//! let mut fb = Framebuffer::filled(10, 10, Rgba::BLACK)?;
//! let mut r = Rasterizer::new(&mut fb);
//!
//! let square = [
//!     Point::new(2.0, 2.0),
//!     Point::new(7.0, 2.0),
//!     Point::new(7.0, 7.0),
//!     Point::new(2.0, 7.0),
//! ];
//! r.draw_polygon(&square, Rgba::WHITE);
//! r.boundary_fill(Point::new(4.0, 4.0), Rgba::RED, Rgba::WHITE);
//!
//! assert_eq!(fb.get_pixel(5, 5), Some(Rgba::RED));
//! assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
//! # Ok::<(), raster2d::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type.
pub mod color;

/// Geometric primitives (points, pixel coordinates, segments).
pub mod geometry;

/// Pixel surface abstraction.
pub mod canvas;

/// Owned RGBA pixel buffer.
pub mod framebuffer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Scan conversion and region fill.
pub mod render;

/// Queued draw commands.
pub mod command;

/// Rasterizer configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster2d operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, PixelSnapshot};
    pub use crate::color::Rgba;
    pub use crate::command::{DrawCommand, DrawList};
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, PixelCoord, Point};
    pub use crate::render::{LineAlgorithm, Rasterizer};
}

// ============================================================================
// Tests
// ============================================================================
