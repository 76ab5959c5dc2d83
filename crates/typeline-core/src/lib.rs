//! Typeline Core: the vocabulary shared by layout and rendering
//!
//! A line of text leaves the layout engine in one of two shapes: a stream of
//! [`types::VertexCommand`]s that trace every glyph outline, or a stream of
//! [`types::GlyphBlit`]s that place pre-rasterized glyph images. This crate
//! defines both shapes, the traits on either side of the engine, and the
//! errors that can stop it.
//!
//! ## The Traits That Power Everything
//!
//! - [`MetricsProvider`] - Your window into a styled typeface: em size,
//!   ascent, descent, advances with kerning, outlines and rasters
//! - [`RenderSurface`] - Where vertex streams get filled and glyph images
//!   get composited
//!
//! Geometry comes from [`kurbo`]; this crate re-exports the handful of
//! types that appear in its public API.

pub mod error;
pub mod size_cache_config;
pub mod traits;

pub use error::{RenderError, Result, TypelineError};
pub use kurbo::{Point, Rect, Size, Vec2};
pub use traits::{MetricsProvider, RenderSurface};

/// The explicit line-break character; callers normalize `\r\n` and `\r` to it.
pub const LINE_BREAK: char = '\n';

/// Never valid inside laid-out text.
pub const CARRIAGE_RETURN: char = '\r';

/// The data structures that flow between layout and rendering
pub mod types {
    use kurbo::{BezPath, Point, Vec2};
    use std::sync::Arc;

    /// Horizontal alignment of every line relative to the origin
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum Justification {
        #[default]
        Left,
        Center,
        Right,
    }

    /// Which horizontal reference line sits on the origin
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum Baseline {
        BoundsTop,
        BoundsCenter,
        TextCenter,
        #[default]
        Text,
        BoundsBottom,
    }

    /// One instruction of an outline path
    ///
    /// Glyph outlines are written in a y-up coordinate system with the
    /// glyph origin on the text baseline.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum VertexCommand {
        MoveTo(Point),
        LineTo(Point),
        CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
        /// Terminates a stream; nothing follows it.
        Stop,
    }

    impl VertexCommand {
        /// The end point of the command, `None` for [`VertexCommand::Stop`]
        pub fn position(&self) -> Option<Point> {
            match *self {
                VertexCommand::MoveTo(p) | VertexCommand::LineTo(p) => Some(p),
                VertexCommand::CurveTo { to, .. } => Some(to),
                VertexCommand::Stop => None,
            }
        }

        pub fn is_stop(&self) -> bool {
            matches!(self, VertexCommand::Stop)
        }

        /// Shift every point the command carries
        pub fn translate(self, by: Vec2) -> Self {
            match self {
                VertexCommand::MoveTo(p) => VertexCommand::MoveTo(p + by),
                VertexCommand::LineTo(p) => VertexCommand::LineTo(p + by),
                VertexCommand::CurveTo { ctrl1, ctrl2, to } => VertexCommand::CurveTo {
                    ctrl1: ctrl1 + by,
                    ctrl2: ctrl2 + by,
                    to: to + by,
                },
                VertexCommand::Stop => VertexCommand::Stop,
            }
        }
    }

    /// Collect a vertex stream into a `kurbo::BezPath`
    ///
    /// Consumption ends at the first [`VertexCommand::Stop`]. Every `MoveTo`
    /// after the first closes the subpath before it, as does the end of the
    /// stream.
    pub fn to_bez_path(commands: impl IntoIterator<Item = VertexCommand>) -> BezPath {
        let mut path = BezPath::new();
        let mut open = false;
        for command in commands {
            match command {
                VertexCommand::MoveTo(p) => {
                    if open {
                        path.close_path();
                    }
                    path.move_to(p);
                    open = true;
                },
                VertexCommand::LineTo(p) => path.line_to(p),
                VertexCommand::CurveTo { ctrl1, ctrl2, to } => path.curve_to(ctrl1, ctrl2, to),
                VertexCommand::Stop => break,
            }
        }
        if open {
            path.close_path();
        }
        path
    }

    /// Raw pixel data of a rasterized glyph
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub format: BitmapFormat,
        pub data: Vec<u8>,
    }

    /// How pixels are arranged in the bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum BitmapFormat {
        /// Premultiplied RGBA, four bytes per pixel
        Rgba8,
        /// Coverage only, one byte per pixel
        Gray8,
    }

    impl BitmapFormat {
        pub fn bytes_per_pixel(self) -> usize {
            match self {
                BitmapFormat::Rgba8 => 4,
                BitmapFormat::Gray8 => 1,
            }
        }
    }

    /// A request to composite one glyph image at a position
    ///
    /// The position is where the glyph origin lands, in the same y-up
    /// coordinates as vertex streams.
    #[derive(Debug, Clone, PartialEq)]
    pub struct GlyphBlit {
        pub ch: char,
        pub image: Arc<BitmapData>,
        pub position: Point,
    }
}

/// How a text run hands its glyphs to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Glyph outlines as one filled vertex stream
    #[default]
    Vector,
    /// Pre-rasterized glyph images, one blit per character
    Bitmap,
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;
    use kurbo::{PathEl, Point, Vec2};

    #[test]
    fn translate_moves_every_point_of_a_curve() {
        let curve = VertexCommand::CurveTo {
            ctrl1: Point::new(1.0, 1.0),
            ctrl2: Point::new(2.0, 2.0),
            to: Point::new(3.0, 3.0),
        };
        let moved = curve.translate(Vec2::new(10.0, -1.0));
        assert_eq!(
            moved,
            VertexCommand::CurveTo {
                ctrl1: Point::new(11.0, 0.0),
                ctrl2: Point::new(12.0, 1.0),
                to: Point::new(13.0, 2.0),
            }
        );
        assert_eq!(VertexCommand::Stop.translate(Vec2::new(5.0, 5.0)), VertexCommand::Stop);
    }

    #[test]
    fn bez_path_closes_subpaths_and_stops_at_stop() {
        let commands = vec![
            VertexCommand::MoveTo(Point::new(0.0, 0.0)),
            VertexCommand::LineTo(Point::new(1.0, 0.0)),
            VertexCommand::MoveTo(Point::new(5.0, 5.0)),
            VertexCommand::LineTo(Point::new(6.0, 5.0)),
            VertexCommand::Stop,
            VertexCommand::MoveTo(Point::new(9.0, 9.0)),
        ];
        let path = to_bez_path(commands);
        let closes = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::ClosePath))
            .count();
        assert_eq!(closes, 2);
        assert_eq!(path.elements().len(), 6);
    }

    #[test]
    fn empty_stream_gives_empty_path() {
        assert!(to_bez_path([VertexCommand::Stop]).elements().is_empty());
    }
}
