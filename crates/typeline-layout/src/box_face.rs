//! A synthetic typeface style made of boxes
//!
//! `BoxFace` needs no font file: every visible character is a rectangle
//! sitting on the baseline, as tall as the ascent and slightly narrower than
//! its advance. Advances and kerning pairs are configurable, which makes it
//! the go-to provider for tests, demos and backend smoke checks.

use kurbo::Point;
use std::collections::HashMap;
use std::sync::Arc;
use typeline_core::{
    traits::Outline,
    types::{BitmapData, BitmapFormat, VertexCommand},
    MetricsProvider,
};

/// Fraction of the advance left empty on each side of a box
const SIDE_BEARING: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct BoxFace {
    em_size: f64,
    ascent: f64,
    descent: f64,
    default_advance: f64,
    advances: HashMap<char, f64>,
    kerning: HashMap<(char, char), f64>,
}

impl BoxFace {
    /// A face with ascent 0.8 em, descent -0.2 em and half-em advances
    pub fn new(em_size: f64) -> Self {
        Self {
            em_size,
            ascent: em_size * 0.8,
            descent: -em_size * 0.2,
            default_advance: em_size * 0.5,
            advances: HashMap::new(),
            kerning: HashMap::new(),
        }
    }

    pub fn with_metrics(mut self, ascent: f64, descent: f64) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self
    }

    pub fn with_default_advance(mut self, advance: f64) -> Self {
        self.default_advance = advance;
        self
    }

    pub fn with_advance(mut self, ch: char, advance: f64) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    /// Add `adjust` to the advance of `left` whenever `right` follows it
    pub fn with_kerning(mut self, left: char, right: char, adjust: f64) -> Self {
        self.kerning.insert((left, right), adjust);
        self
    }

    fn has_ink(ch: char) -> bool {
        !ch.is_whitespace() && !ch.is_control()
    }

    /// Box corners as (left, right) x-coordinates
    fn box_span(&self, ch: char) -> (f64, f64) {
        let advance = self.advance_of(ch);
        let bearing = advance * SIDE_BEARING;
        (bearing, advance - bearing)
    }
}

impl MetricsProvider for BoxFace {
    fn em_size(&self) -> f64 {
        self.em_size
    }

    fn ascent(&self) -> f64 {
        self.ascent
    }

    fn descent(&self) -> f64 {
        self.descent
    }

    fn advance_between(&self, ch: char, next: char) -> f64 {
        self.advance_of(ch) + self.kerning.get(&(ch, next)).copied().unwrap_or(0.0)
    }

    fn advance_of(&self, ch: char) -> f64 {
        if ch.is_control() {
            return 0.0;
        }
        self.advances.get(&ch).copied().unwrap_or(self.default_advance)
    }

    fn outline_of(&self, ch: char) -> Option<Outline<'_>> {
        if !Self::has_ink(ch) {
            return None;
        }
        let (x0, x1) = self.box_span(ch);
        let top = self.ascent;
        let commands = [
            VertexCommand::MoveTo(Point::new(x0, 0.0)),
            VertexCommand::LineTo(Point::new(x1, 0.0)),
            VertexCommand::LineTo(Point::new(x1, top)),
            VertexCommand::LineTo(Point::new(x0, top)),
            VertexCommand::Stop,
        ];
        Some(Box::new(commands.into_iter()))
    }

    fn raster_of(&self, ch: char, _subpixel_x: f64, _subpixel_y: f64) -> Option<Arc<BitmapData>> {
        if !Self::has_ink(ch) {
            return None;
        }
        let (x0, x1) = self.box_span(ch);
        let width = (x1 - x0).ceil().max(1.0) as u32;
        let height = self.ascent.ceil().max(1.0) as u32;
        Some(Arc::new(BitmapData {
            width,
            height,
            format: BitmapFormat::Gray8,
            data: vec![255; (width * height) as usize],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kerning_only_applies_to_the_pair() {
        let face = BoxFace::new(10.0).with_kerning('A', 'V', -2.0);
        assert_eq!(face.advance_between('A', 'V'), 3.0);
        assert_eq!(face.advance_between('A', 'B'), 5.0);
        assert_eq!(face.advance_of('A'), 5.0);
    }

    #[test]
    fn whitespace_has_advance_but_no_geometry() {
        let face = BoxFace::new(10.0);
        assert_eq!(face.advance_of(' '), 5.0);
        assert!(face.outline_of(' ').is_none());
        assert!(face.outline_of('\n').is_none());
        assert!(face.raster_of(' ', 0.0, 0.0).is_none());
    }

    #[test]
    fn outline_is_a_box_on_the_baseline() {
        let face = BoxFace::new(10.0);
        let commands: Vec<_> = face.outline_of('x').into_iter().flatten().collect();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], VertexCommand::MoveTo(Point::new(0.5, 0.0)));
        assert_eq!(commands[2], VertexCommand::LineTo(Point::new(4.5, 8.0)));
        assert!(commands[4].is_stop());
    }

    #[test]
    fn raster_is_a_solid_mask() {
        let face = BoxFace::new(10.0);
        let image = face.raster_of('x', 0.0, 0.0).unwrap();
        assert_eq!((image.width, image.height), (4, 8));
        assert_eq!(image.format, BitmapFormat::Gray8);
        assert!(image.data.iter().all(|&a| a == 255));
    }
}
