//! Skia Surface - anti-aliased rasterization via tiny-skia
//!
//! Vector-mode runs arrive as vertex streams and are filled with the winding
//! rule; bitmap-mode runs arrive as glyph images and are composited one by
//! one. Layout coordinates are y-up with the baseline origin at the bottom
//! left of the pixmap; the surface flips them into pixel rows.

use kurbo::PathEl;
use tiny_skia::{FillRule, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint, Transform};
use typeline_core::{
    error::{RenderError, Result},
    traits::RenderSurface,
    types::{to_bez_path, BitmapData, BitmapFormat, GlyphBlit, VertexCommand},
    Color,
};

/// tiny-skia pixmap that text runs can render into
pub struct SkiaSurface {
    pixmap: Pixmap,
    /// Layout space (y-up) to pixel space (y-down)
    transform: Transform,
}

impl SkiaSurface {
    /// A transparent `width` x `height` canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;
        let transform = Transform::from_row(1.0, 0.0, 0.0, -1.0, 0.0, height as f32);
        Ok(Self { pixmap, transform })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row by row from the top
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Alpha of the pixel at column `x`, row `y` (rows counted from the top)
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodingFailed(e.to_string()).into())
    }

    /// Turn a glyph image into a premultiplied pixmap
    ///
    /// Coverage masks take the color; color images are used as they are.
    fn image_to_pixmap(image: &BitmapData, color: Color) -> Result<Pixmap> {
        let invalid = || RenderError::InvalidDimensions {
            width: image.width,
            height: image.height,
        };
        let size = IntSize::from_wh(image.width, image.height).ok_or_else(invalid)?;
        let pixels = (image.width as usize) * (image.height as usize);
        if image.data.len() != pixels * image.format.bytes_per_pixel() {
            return Err(invalid().into());
        }

        let data = match image.format {
            BitmapFormat::Rgba8 => image.data.clone(),
            BitmapFormat::Gray8 => {
                let mut rgba = Vec::with_capacity(pixels * 4);
                for &coverage in &image.data {
                    let alpha = mul_div_255(coverage, color.a);
                    rgba.extend_from_slice(&[
                        mul_div_255(color.r, alpha),
                        mul_div_255(color.g, alpha),
                        mul_div_255(color.b, alpha),
                        alpha,
                    ]);
                }
                rgba
            },
        };

        Pixmap::from_vec(data, size).ok_or_else(|| invalid().into())
    }
}

fn mul_div_255(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

impl RenderSurface for SkiaSurface {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn fill_path(
        &mut self,
        commands: &mut dyn Iterator<Item = VertexCommand>,
        color: Color,
    ) -> Result<()> {
        let path = to_bez_path(commands);
        if path.elements().is_empty() {
            return Ok(());
        }

        // Translate kurbo's path format into tiny-skia's native format
        let mut builder = PathBuilder::new();
        for element in path.elements() {
            match *element {
                PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                PathEl::QuadTo(ctrl, end) => {
                    builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
                },
                PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    end.x as f32,
                    end.y as f32,
                ),
                PathEl::ClosePath => builder.close(),
            }
        }
        // Degenerate outlines (zero area) have nothing to fill.
        let Some(skia_path) = builder.finish() else {
            log::debug!("Skia: degenerate path skipped");
            return Ok(());
        };

        let mut paint = Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);

        log::debug!(
            "Skia: filling path with {} elements on {}x{}",
            path.elements().len(),
            self.pixmap.width(),
            self.pixmap.height()
        );
        self.pixmap
            .fill_path(&skia_path, &paint, FillRule::Winding, self.transform, None);
        Ok(())
    }

    fn blit(&mut self, blit: &GlyphBlit, color: Color) -> Result<()> {
        let image = Self::image_to_pixmap(&blit.image, color)?;

        // The image sits on the baseline: its bottom-left corner is the
        // glyph origin.
        let x = blit.position.x.round() as i32;
        let top = blit.position.y + blit.image.height as f64;
        let y = (self.pixmap.height() as f64 - top).round() as i32;

        log::trace!("Skia: blitting {:?} at ({}, {})", blit.ch, x, y);
        self.pixmap.draw_pixmap(
            x,
            y,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }
}
