//! Lazy glyph placement: vertex streams and raster blits
//!
//! Both producers share one pen walk. The walk starts at the baseline
//! offset, positions every line by its justification, and steps one em down
//! between lines. Nothing is computed ahead of the consumer: dropping a
//! producer early is a valid way to stop.

use crate::measure::{advance_at, measure_text};
use kurbo::Vec2;
use std::iter::FusedIterator;
use typeline_core::{
    error::{Result, TypelineError},
    traits::Outline,
    types::{Baseline, GlyphBlit, Justification, VertexCommand},
    MetricsProvider, LINE_BREAK,
};

/// Vertical start of the first line for `baseline`
///
/// Only the baselines the glyph walk knows are accepted; `TextCenter` and
/// `BoundsBottom` are bounds-only.
pub(crate) fn baseline_offset(baseline: Baseline, style: &dyn MetricsProvider) -> Result<f64> {
    match baseline {
        Baseline::Text => Ok(0.0),
        Baseline::BoundsTop => Ok(-style.ascent()),
        Baseline::BoundsCenter => Ok(-style.ascent() / 2.0),
        Baseline::TextCenter | Baseline::BoundsBottom => {
            Err(TypelineError::UnsupportedBaseline(baseline))
        },
    }
}

/// Horizontal start of a line `width` pixels wide
pub(crate) fn justification_offset(justification: Justification, width: f64) -> f64 {
    match justification {
        Justification::Left => 0.0,
        Justification::Center => -width / 2.0,
        Justification::Right => -width,
    }
}

/// Walks every character of every line, yielding where its origin sits
///
/// Positions exclude the run's origin.
struct PenWalk<'a> {
    style: &'a dyn MetricsProvider,
    justification: Justification,
    lines: std::str::Split<'a, char>,
    line: Vec<char>,
    index: usize,
    pen: Vec2,
    started: bool,
}

impl<'a> PenWalk<'a> {
    fn new(
        text: &'a str,
        style: &'a dyn MetricsProvider,
        justification: Justification,
        baseline: Baseline,
    ) -> Result<Self> {
        // Empty text has no first line to place.
        let y = if text.is_empty() {
            0.0
        } else {
            baseline_offset(baseline, style)?
        };
        Ok(Self {
            style,
            justification,
            lines: text.split(LINE_BREAK),
            line: Vec::new(),
            index: 0,
            pen: Vec2::new(0.0, y),
            started: false,
        })
    }
}

impl Iterator for PenWalk<'_> {
    type Item = (char, Vec2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index < self.line.len() {
                let ch = self.line[self.index];
                let at = self.pen;
                self.pen.x += advance_at(self.style, &self.line, self.index);
                self.index += 1;
                return Some((ch, at));
            }

            let next_line = self.lines.next()?;
            if self.started {
                self.pen.y -= self.style.em_size();
            }
            self.started = true;
            self.line = next_line.chars().collect();
            self.index = 0;

            let width = measure_text(self.style, &self.line).width;
            self.pen.x = justification_offset(self.justification, width);
            log::trace!(
                "Line of {} chars, width {:.2}, starts at ({:.2}, {:.2})",
                self.line.len(),
                width,
                self.pen.x,
                self.pen.y
            );
        }
    }
}

/// The outline of a whole text run as one vertex stream
///
/// Glyph commands are replayed with their own terminators removed; a single
/// [`VertexCommand::Stop`] ends the stream, even for empty text.
pub struct Vertices<'a> {
    walk: PenWalk<'a>,
    origin: Vec2,
    glyph: Option<(Outline<'a>, Vec2)>,
    finished: bool,
}

impl<'a> Vertices<'a> {
    pub(crate) fn new(
        text: &'a str,
        style: &'a dyn MetricsProvider,
        origin: Vec2,
        justification: Justification,
        baseline: Baseline,
    ) -> Result<Self> {
        let walk = PenWalk::new(text, style, justification, baseline)?;
        log::debug!("Producing vertices for {} chars", text.chars().count());
        Ok(Self {
            walk,
            origin,
            glyph: None,
            finished: false,
        })
    }
}

impl Iterator for Vertices<'_> {
    type Item = VertexCommand;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((outline, at)) = self.glyph.as_mut() {
                match outline.next() {
                    Some(VertexCommand::Stop) => continue,
                    Some(command) => return Some(command.translate(*at)),
                    None => {},
                }
                self.glyph = None;
            }

            match self.walk.next() {
                Some((ch, pen)) => {
                    let style = self.walk.style;
                    if let Some(outline) = style.outline_of(ch) {
                        self.glyph = Some((outline, pen + self.origin));
                    }
                },
                None if self.finished => return None,
                None => {
                    self.finished = true;
                    return Some(VertexCommand::Stop);
                },
            }
        }
    }
}

impl FusedIterator for Vertices<'_> {}

/// One raster blit per character that has an image
pub struct GlyphBlits<'a> {
    walk: PenWalk<'a>,
    origin: Vec2,
}

impl<'a> GlyphBlits<'a> {
    pub(crate) fn new(
        text: &'a str,
        style: &'a dyn MetricsProvider,
        origin: Vec2,
        justification: Justification,
        baseline: Baseline,
    ) -> Result<Self> {
        let walk = PenWalk::new(text, style, justification, baseline)?;
        log::debug!("Producing glyph blits for {} chars", text.chars().count());
        Ok(Self { walk, origin })
    }
}

impl Iterator for GlyphBlits<'_> {
    type Item = GlyphBlit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (ch, pen) = self.walk.next()?;
            let style = self.walk.style;
            if let Some(image) = style.raster_of(ch, 0.0, 0.0) {
                return Some(GlyphBlit {
                    ch,
                    image,
                    position: (pen + self.origin).to_point(),
                });
            }
        }
    }
}

impl FusedIterator for GlyphBlits<'_> {}
