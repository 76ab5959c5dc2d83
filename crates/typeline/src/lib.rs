//! Typeline - text layout with pluggable rendering surfaces
//!
//! Typeline takes a string, a styled typeface and an origin, and answers the
//! questions an interactive text widget asks:
//!
//! 1. How big is this text, or any range of it?
//! 2. Where should it wrap to fit a width?
//! 3. What does it look like, as outlines or as glyph images?
//! 4. Which character boundary is under the pointer?
//!
//! # Example
//!
//! ```
//! use typeline::prelude::*;
//!
//! let face = BoxFace::new(16.0);
//! let lines = wrap_lines("The quick brown fox", 60.0, &face);
//! let run = TextRun::builder(&face)
//!     .text(join_with_breaks(&lines))
//!     .origin((0.0, 0.0))
//!     .build();
//!
//! let mut surface = SvgSurface::new(80.0, 80.0);
//! run.render(&mut surface, Color::black())?;
//! assert!(surface.finish()?.contains("<path"));
//! # Ok::<(), TypelineError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `render-svg`: SVG document surface
//! - `render-skia`: tiny-skia pixmap surface with PNG export

pub use typeline_core::{
    error, size_cache_config, traits, types, Color, Point, Rect, RenderMode, Size, Vec2,
};
pub use typeline_layout as layout;

#[cfg(feature = "render-svg")]
pub use typeline_render_svg as render_svg;

#[cfg(feature = "render-skia")]
pub use typeline_render_skia as render_skia;

/// Common imports for typical usage
pub mod prelude {
    pub use typeline_core::{
        error::{RenderError, Result, TypelineError},
        traits::{MetricsProvider, RenderSurface},
        types::{Baseline, GlyphBlit, Justification, VertexCommand},
        Color, Point, Rect, RenderMode, Size, Vec2,
    };
    pub use typeline_layout::{
        insert_line_breaks, join_with_breaks, wrap_lines, BoxFace, TextRun, TextRunBuilder,
    };

    #[cfg(feature = "render-skia")]
    pub use typeline_render_skia::SkiaSurface;
    #[cfg(feature = "render-svg")]
    pub use typeline_render_svg::SvgSurface;
}
