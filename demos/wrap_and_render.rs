//! Example: Wrap a paragraph, render it twice, and hit-test it
//!
//! Shows the whole round trip on the synthetic box face:
//!
//! 1. Greedy wrapping to a pixel budget
//! 2. Vector rendering into an SVG document
//! 3. Bitmap rendering into a PNG through tiny-skia
//! 4. Mapping a pointer position back to a character index
//!
//! Run with: `RUST_LOG=debug cargo run --example wrap_and_render`

use std::fs;

use typeline::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let text = "Typography is the art and technique of arranging type to make \
        written language legible, readable and appealing when displayed.";
    let face = BoxFace::new(18.0)
        .with_advance('i', 4.0)
        .with_advance('l', 4.0)
        .with_advance('m', 14.0)
        .with_kerning('T', 'y', -2.0);
    let max_width = 320.0;

    let lines = wrap_lines(text, max_width, &face);
    println!("Wrapped into {} lines at {}px:", lines.len(), max_width);
    for line in &lines {
        println!("  | {}", line);
    }

    let wrapped = join_with_breaks(&lines);
    let probe = TextRun::new(wrapped.as_str(), &face);
    let size = probe.measure();
    let width = size.width.ceil() + 20.0;
    let height = size.height.ceil() + 20.0;

    // The first line's baseline sits one em below the top edge.
    let origin = (10.0, height - 10.0 - face.em_size());

    let mut svg = SvgSurface::new(width, height);
    TextRun::builder(&face)
        .text(wrapped.as_str())
        .origin(origin)
        .build()
        .render(&mut svg, Color::rgba(20, 20, 80, 255))?;
    fs::write("wrap_and_render.svg", svg.finish()?)?;
    println!("Wrote wrap_and_render.svg ({} paths)", svg.path_count());

    let mut pixmap = SkiaSurface::new(width as u32, height as u32)?;
    let bitmap_run = TextRun::builder(&face)
        .text(wrapped.as_str())
        .origin(origin)
        .justification(Justification::Left)
        .render_mode(RenderMode::Bitmap)
        .build();
    bitmap_run.render(&mut pixmap, Color::black())?;
    fs::write("wrap_and_render.png", pixmap.encode_png()?)?;
    println!("Wrote wrap_and_render.png ({}x{})", pixmap.width(), pixmap.height());

    // Hit testing ignores the origin; the first line sits at em * lines.
    let pointer = Point::new(60.0, face.em_size() * lines.len() as f64);
    match bitmap_run.character_index_before(pointer)? {
        Some(index) => println!("Pointer at {:?} is before character {}", pointer, index),
        None => println!("Pointer at {:?} is outside the text", pointer),
    }

    Ok(())
}
