//! The contracts on either side of the layout engine
//!
//! - [`MetricsProvider`] - Everything the engine needs to know about a
//!   styled typeface, looked up per character
//! - [`RenderSurface`] - Where the engine's output ends up

use crate::{
    error::Result,
    types::{BitmapData, GlyphBlit, VertexCommand},
    Color,
};
use std::sync::Arc;

/// A lazily walked glyph outline
pub type Outline<'a> = Box<dyn Iterator<Item = VertexCommand> + 'a>;

/// Your key to a styled typeface
///
/// A provider is shared and read-only: text runs borrow it, look things up,
/// and never mutate it. All values are in pixels at the style's size.
///
/// ```ignore
/// struct Mono;
///
/// impl MetricsProvider for Mono {
///     fn em_size(&self) -> f64 { 12.0 }
///     fn ascent(&self) -> f64 { 9.0 }
///     fn descent(&self) -> f64 { -3.0 }
///     fn advance_between(&self, ch: char, _next: char) -> f64 { self.advance_of(ch) }
///     fn advance_of(&self, _ch: char) -> f64 { 7.0 }
///     fn outline_of(&self, _ch: char) -> Option<Outline<'_>> { None }
/// }
/// ```
pub trait MetricsProvider: Send + Sync {
    /// Nominal line height; consecutive lines sit this far apart
    fn em_size(&self) -> f64;

    /// Distance from the baseline up to the top of typical glyphs
    fn ascent(&self) -> f64;

    /// Distance from the baseline to the bottom of typical glyphs
    ///
    /// Negative when glyphs reach below the baseline, which is the usual case.
    fn descent(&self) -> f64;

    /// Advance from `ch` to `next`, kerning included
    fn advance_between(&self, ch: char, next: char) -> f64;

    /// Advance of `ch` with no following character
    fn advance_of(&self, ch: char) -> f64;

    /// The outline of `ch` with its origin on the baseline
    ///
    /// Returns None for characters without visible geometry. A trailing
    /// [`VertexCommand::Stop`] is allowed and ignored.
    fn outline_of(&self, ch: char) -> Option<Outline<'_>>;

    /// A rasterized image of `ch` at the given subpixel phase
    ///
    /// Providers without a raster cache keep the default.
    fn raster_of(&self, _ch: char, _subpixel_x: f64, _subpixel_y: f64) -> Option<Arc<BitmapData>> {
        None
    }
}

/// Where glyphs become visible
///
/// Vector output arrives as one vertex stream per text run; raster output
/// arrives as one blit per glyph.
pub trait RenderSurface {
    /// Used in logs and error messages
    fn name(&self) -> &'static str;

    /// Fill the path traced by `commands` with `color`
    ///
    /// The stream ends with [`VertexCommand::Stop`].
    fn fill_path(
        &mut self,
        commands: &mut dyn Iterator<Item = VertexCommand>,
        color: Color,
    ) -> Result<()>;

    /// Composite one glyph image
    ///
    /// Coverage-only images are tinted with `color`; color images are
    /// composited as they are.
    fn blit(&mut self, blit: &GlyphBlit, color: Color) -> Result<()>;
}
