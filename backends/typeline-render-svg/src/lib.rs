//! SVG Surface: where vertex streams become scalable paths
//!
//! Every filled vertex stream becomes one `<path>` element. Text coordinates
//! are y-up with the origin on the baseline; the document flips them into
//! SVG's y-down space with a single group transform, so path data stays in
//! layout units.
//!
//! Raster blits are not supported: SVG output is for vector mode only.

use std::fmt::Write as FmtWrite;
use typeline_core::{
    error::{RenderError, Result},
    traits::RenderSurface,
    types::{to_bez_path, GlyphBlit, VertexCommand},
    Color,
};

/// Collects filled paths into an SVG document
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    paths: Vec<String>,
}

impl SvgSurface {
    /// A `width` x `height` canvas whose layout origin is the bottom-left corner
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    /// Number of `<path>` elements collected so far
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Render the complete document
    pub fn finish(&self) -> Result<String> {
        let mut svg = String::new();
        self.write_document(&mut svg)
            .map_err(|_| RenderError::PathBuildingFailed)?;
        Ok(svg)
    }

    fn write_document(&self, svg: &mut String) -> std::fmt::Result {
        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{:.0}" height="{:.0}">"#,
            self.width, self.height, self.width, self.height
        )?;
        // Flip y so layout coordinates can be used as they are.
        writeln!(svg, r#"  <g transform="matrix(1 0 0 -1 0 {:.2})">"#, self.height)?;
        for path in &self.paths {
            writeln!(svg, "    {}", path)?;
        }
        writeln!(svg, "  </g>")?;
        writeln!(svg, "</svg>")
    }
}

impl RenderSurface for SvgSurface {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn fill_path(
        &mut self,
        commands: &mut dyn Iterator<Item = VertexCommand>,
        color: Color,
    ) -> Result<()> {
        let path = to_bez_path(commands);
        if path.elements().is_empty() {
            log::debug!("SvgSurface: empty vertex stream, nothing to fill");
            return Ok(());
        }

        let mut element = String::new();
        write!(
            &mut element,
            r#"<path d="{}" fill="rgb({},{},{})" fill-opacity="{:.2}"/>"#,
            path.to_svg(),
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0
        )
        .map_err(|_| RenderError::PathBuildingFailed)?;

        log::debug!("SvgSurface: added path with {} elements", path.elements().len());
        self.paths.push(element);
        Ok(())
    }

    fn blit(&mut self, blit: &GlyphBlit, _color: Color) -> Result<()> {
        Err(RenderError::FormatNotSupported(format!(
            "bitmap blit of {:?} on an SVG surface",
            blit.ch
        ))
        .into())
    }
}
