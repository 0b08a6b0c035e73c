//! Per-frame draw command lists.
//!
//! A [`DrawList`] collects primitives during a frame and replays them through
//! a [`Rasterizer`] in insertion order. The list is owned by whoever drives
//! the frame; neither the list nor the rasterizer keeps global state.
//!
//! ```
//! use raster2d::prelude::*;
//!
//! let mut fb = Framebuffer::filled(10, 10, Rgba::BLACK).unwrap();
//! let mut frame = DrawList::new();
//! frame.push(DrawCommand::line(Point::new(0.0, 0.0), Point::new(9.0, 0.0), Rgba::WHITE));
//! frame.push(DrawCommand::Point {
//!     position: Point::new(5.0, 5.0),
//!     color: Rgba::RED,
//! });
//!
//! frame.flush(&mut Rasterizer::new(&mut fb));
//! assert!(frame.is_empty());
//! assert_eq!(fb.count_color(Rgba::WHITE), 10);
//! ```

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::Point;
use crate::render::{LineAlgorithm, Rasterizer};

/// One queued primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Single pixel.
    Point {
        /// Position, rounded to the nearest pixel.
        position: Point,
        /// Pixel color.
        color: Rgba,
    },
    /// Line segment.
    Line {
        /// Start point.
        start: Point,
        /// End point.
        end: Point,
        /// Line color.
        color: Rgba,
        /// Per-segment override; `None` uses the rasterizer's configuration.
        algorithm: Option<LineAlgorithm>,
    },
    /// Open chain of segments.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Line color.
        color: Rgba,
    },
    /// Closed chain of segments.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Line color.
        color: Rgba,
    },
    /// Stroked and filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f32,
        /// Outline color, also the fill boundary.
        stroke: Rgba,
        /// Interior color.
        fill: Rgba,
    },
    /// Stroked and filled axis-aligned ellipse.
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal semi-axis.
        rx: f32,
        /// Vertical semi-axis.
        ry: f32,
        /// Outline color, also the fill boundary.
        stroke: Rgba,
        /// Interior color.
        fill: Rgba,
    },
    /// Replace a single-colored region.
    FloodFill {
        /// Seed point.
        seed: Point,
        /// Replacement color.
        fill: Rgba,
        /// Color the region must consist of.
        background: Rgba,
    },
    /// Fill up to a boundary color.
    BoundaryFill {
        /// Seed point.
        seed: Point,
        /// Replacement color.
        fill: Rgba,
        /// Color that stops the fill.
        boundary: Rgba,
    },
}

impl DrawCommand {
    /// Line segment using the rasterizer's configured algorithm.
    #[must_use]
    pub fn line(start: Point, end: Point, color: Rgba) -> Self {
        Self::Line {
            start,
            end,
            color,
            algorithm: None,
        }
    }

    /// Short name of the primitive, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point { .. } => "point",
            Self::Line { .. } => "line",
            Self::Polyline { .. } => "polyline",
            Self::Polygon { .. } => "polygon",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::FloodFill { .. } => "flood_fill",
            Self::BoundaryFill { .. } => "boundary_fill",
        }
    }

    /// Draw this command through `rasterizer`.
    pub fn execute<C: Canvas + ?Sized>(&self, rasterizer: &mut Rasterizer<'_, C>) {
        match self {
            Self::Point { position, color } => rasterizer.draw_point(*position, *color),
            Self::Line {
                start,
                end,
                color,
                algorithm,
            } => match algorithm {
                Some(algorithm) => rasterizer.draw_line_with(*start, *end, *color, *algorithm),
                None => rasterizer.draw_line(*start, *end, *color),
            },
            Self::Polyline { points, color } => rasterizer.draw_polyline(points, *color),
            Self::Polygon { points, color } => rasterizer.draw_polygon(points, *color),
            Self::Circle {
                center,
                radius,
                stroke,
                fill,
            } => {
                rasterizer.draw_circle(*center, *radius, *stroke, *fill);
            }
            Self::Ellipse {
                center,
                rx,
                ry,
                stroke,
                fill,
            } => {
                rasterizer.draw_ellipse(*center, *rx, *ry, *stroke, *fill);
            }
            Self::FloodFill {
                seed,
                fill,
                background,
            } => {
                rasterizer.flood_fill(*seed, *fill, *background);
            }
            Self::BoundaryFill {
                seed,
                fill,
                boundary,
            } => {
                rasterizer.boundary_fill(*seed, *fill, *boundary);
            }
        }
    }
}

/// Ordered list of commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Number of queued commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all queued commands without drawing them.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Iterate over queued commands in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Draw every command in insertion order, keeping the list intact.
    pub fn render<C: Canvas + ?Sized>(&self, rasterizer: &mut Rasterizer<'_, C>) {
        log::debug!("rendering {} draw commands", self.commands.len());
        for command in &self.commands {
            log::trace!("draw {}", command.kind());
            command.execute(rasterizer);
        }
    }

    /// Draw every command, then clear the list for the next frame.
    pub fn flush<C: Canvas + ?Sized>(&mut self, rasterizer: &mut Rasterizer<'_, C>) {
        self.render(rasterizer);
        self.clear();
    }
}

impl Extend<DrawCommand> for DrawList {
    fn extend<I: IntoIterator<Item = DrawCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl FromIterator<DrawCommand> for DrawList {
    fn from_iter<I: IntoIterator<Item = DrawCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
