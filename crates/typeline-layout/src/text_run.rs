//! A string plus everything needed to place it

use crate::{
    hit_test,
    measure::{self, measure_text},
    vertices::{GlyphBlits, Vertices},
    wrap,
};
use kurbo::{Point, Rect, Size, Vec2};
use std::cell::Cell;
use std::fmt;
use typeline_core::{
    error::Result,
    size_cache_config,
    types::{Baseline, Justification},
    Color, MetricsProvider, RenderMode, RenderSurface,
};

/// Text laid out with one typeface style
///
/// The style is borrowed: many runs can share it and it outlives them all.
/// Everything except the text is fixed at construction. Changing the text
/// drops the cached size immediately.
///
/// A run caches the size of its text behind a `Cell`, so it is not `Sync`;
/// share it between threads only behind a lock.
pub struct TextRun<'s> {
    style: &'s dyn MetricsProvider,
    text: String,
    chars: Vec<char>,
    origin: Point,
    justification: Justification,
    baseline: Baseline,
    render_mode: RenderMode,
    /// Zero width means "not computed"
    size_cache: Cell<Size>,
}

impl<'s> TextRun<'s> {
    /// Start building a run for `style`
    pub fn builder(style: &'s dyn MetricsProvider) -> TextRunBuilder<'s> {
        TextRunBuilder::new(style)
    }

    /// A left-justified run on the text baseline at the origin
    pub fn new(text: impl Into<String>, style: &'s dyn MetricsProvider) -> Self {
        Self::builder(style).text(text).build()
    }

    /// A run for `text` that copies every other setting from `other`
    pub fn with_style_of(text: impl Into<String>, other: &TextRun<'s>) -> Self {
        Self::builder(other.style)
            .text(text)
            .origin(other.origin)
            .justification(other.justification)
            .baseline(other.baseline)
            .render_mode(other.render_mode)
            .build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, dropping the cached size if it changed
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.invalidate_size_cache();
            self.chars = text.chars().collect();
            self.text = text;
        }
    }

    pub fn style(&self) -> &'s dyn MetricsProvider {
        self.style
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Size of the whole text, served from the cache when possible
    pub fn measure(&self) -> Size {
        if !size_cache_config::is_size_cache_enabled() {
            return measure_text(self.style, &self.chars);
        }

        let cached = self.size_cache.get();
        if cached.width != 0.0 {
            log::trace!("Size cache hit: {:?}", cached);
            return cached;
        }

        let size = measure_text(self.style, &self.chars);
        log::trace!("Size cache miss, measured {:?}", size);
        self.size_cache.set(size);
        size
    }

    /// Size of arbitrary text in this run's style
    ///
    /// Only the run's own text goes through the cache.
    pub fn measure_str(&self, text: &str) -> Size {
        if text == self.text {
            return self.measure();
        }
        let chars: Vec<char> = text.chars().collect();
        measure_text(self.style, &chars)
    }

    /// Size of the characters `start..=end_inclusive` of this run's text
    pub fn measure_range(&self, start: usize, end_inclusive: usize) -> Size {
        measure::measure_range(self.style, &self.chars, start, end_inclusive)
    }

    /// The cached size, if one is currently valid
    pub fn cached_size(&self) -> Option<Size> {
        let cached = self.size_cache.get();
        (cached.width != 0.0).then_some(cached)
    }

    pub fn invalidate_size_cache(&self) {
        self.size_cache.set(Size::ZERO);
    }

    /// Lines in `start..=end_inclusive`, indices clamped into the text
    pub fn count_lines(&self, start: usize, end_inclusive: usize) -> usize {
        measure::count_lines(&self.chars, start, end_inclusive)
    }

    pub fn count_all_lines(&self) -> usize {
        self.count_lines(0, self.chars.len().saturating_sub(1))
    }

    /// Pen offset after walking `start..=end_inclusive`
    pub fn offset_of_range(&self, start: usize, end_inclusive: usize) -> Vec2 {
        measure::offset_of_range(self.style, &self.chars, start, end_inclusive)
    }

    /// Pen offset at the left edge of character `index`
    pub fn offset_left_of_character_index(&self, index: usize) -> Vec2 {
        match index.checked_sub(1) {
            Some(last) => self.offset_of_range(0, last),
            None => Vec2::ZERO,
        }
    }

    /// Bounding box of the text relative to the run's coordinate system
    ///
    /// Spans `descent..height + descent` vertically for every justification;
    /// only `BoundsCenter` moves it, down by half its height.
    pub fn local_bounds(&self) -> Rect {
        let size = self.measure();
        let descent = self.style.descent();

        let (x0, x1) = match self.justification {
            Justification::Left => (0.0, size.width),
            Justification::Center => (-size.width / 2.0, size.width / 2.0),
            Justification::Right => (-size.width, 0.0),
        };
        let mut bounds = Rect::new(x0, descent, x1, size.height + descent);

        match self.baseline {
            Baseline::BoundsCenter => bounds = bounds - Vec2::new(0.0, bounds.height() / 2.0),
            Baseline::BoundsTop | Baseline::TextCenter | Baseline::Text | Baseline::BoundsBottom => {},
        }

        bounds + self.origin.to_vec2()
    }

    /// Every glyph outline of the text as one lazy vertex stream
    pub fn vertices(&self) -> Result<Vertices<'_>> {
        Vertices::new(
            &self.text,
            self.style,
            self.origin.to_vec2(),
            self.justification,
            self.baseline,
        )
    }

    /// One lazy raster blit per glyph
    pub fn glyph_blits(&self) -> Result<GlyphBlits<'_>> {
        GlyphBlits::new(
            &self.text,
            self.style,
            self.origin.to_vec2(),
            self.justification,
            self.baseline,
        )
    }

    /// Hand the run to `surface` in its render mode
    pub fn render(&self, surface: &mut dyn RenderSurface, color: Color) -> Result<()> {
        log::debug!(
            "Rendering {} chars to {} as {:?}",
            self.chars.len(),
            surface.name(),
            self.render_mode
        );
        match self.render_mode {
            RenderMode::Vector => {
                let mut vertices = self.vertices()?;
                surface.fill_path(&mut vertices, color)
            },
            RenderMode::Bitmap => {
                for blit in self.glyph_blits()? {
                    surface.blit(&blit, color)?;
                }
                Ok(())
            },
        }
    }

    /// Character boundary closest to `point`, `None` for empty text
    pub fn character_index_before(&self, point: Point) -> Result<Option<usize>> {
        hit_test::character_index_before(self.style, &self.chars, point)
    }

    /// The run's text wrapped to `max_width` in its own style
    pub fn wrapped_lines(&self, max_width: f64) -> Vec<String> {
        wrap::wrap_lines(&self.text, max_width, self.style)
    }
}

impl fmt::Debug for TextRun<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRun")
            .field("text", &self.text)
            .field("origin", &self.origin)
            .field("justification", &self.justification)
            .field("baseline", &self.baseline)
            .field("render_mode", &self.render_mode)
            .field("size_cache", &self.size_cache.get())
            .finish_non_exhaustive()
    }
}

/// Builder for [`TextRun`]
pub struct TextRunBuilder<'s> {
    style: &'s dyn MetricsProvider,
    text: String,
    origin: Point,
    justification: Justification,
    baseline: Baseline,
    render_mode: RenderMode,
}

impl<'s> TextRunBuilder<'s> {
    pub fn new(style: &'s dyn MetricsProvider) -> Self {
        Self {
            style,
            text: String::new(),
            origin: Point::ORIGIN,
            justification: Justification::default(),
            baseline: Baseline::default(),
            render_mode: RenderMode::default(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<Point>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn build(self) -> TextRun<'s> {
        TextRun {
            style: self.style,
            chars: self.text.chars().collect(),
            text: self.text,
            origin: self.origin,
            justification: self.justification,
            baseline: self.baseline,
            render_mode: self.render_mode,
            size_cache: Cell::new(Size::ZERO),
        }
    }
}
