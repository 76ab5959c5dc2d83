//! End-to-end rendering of laid-out runs into a pixmap

use typeline_core::{types::Baseline, Color, RenderMode};
use typeline_layout::{BoxFace, TextRun};
use typeline_render_skia::SkiaSurface;

fn inked_pixels(surface: &SkiaSurface) -> usize {
    surface.data().chunks_exact(4).filter(|px| px[3] > 0).count()
}

#[test]
fn vector_run_leaves_ink_inside_its_bounds() {
    let face = BoxFace::new(20.0);
    let run = TextRun::builder(&face).text("Hi").origin((4.0, 6.0)).build();
    let mut surface = SkiaSurface::new(64, 32).unwrap();

    run.render(&mut surface, Color::black()).unwrap();

    assert!(inked_pixels(&surface) > 0);
    // First box spans x in [5, 9] and rises 16 units above the baseline at y=6,
    // so its middle sits at pixel row 32 - 14.
    assert_eq!(surface.alpha_at(7, 18), Some(255));
    // Below the baseline stays empty.
    assert_eq!(surface.alpha_at(7, 30), Some(0));
}

#[test]
fn bitmap_run_blits_glyph_masks() {
    let face = BoxFace::new(20.0);
    let run = TextRun::builder(&face)
        .text("ab")
        .origin((0.0, 0.0))
        .render_mode(RenderMode::Bitmap)
        .build();
    let mut surface = SkiaSurface::new(40, 20).unwrap();

    run.render(&mut surface, Color::rgba(0, 0, 255, 255)).unwrap();

    assert!(inked_pixels(&surface) > 0);
    // Each mask is 10x16 with its bottom on the baseline (pixel row 20).
    assert_eq!(surface.alpha_at(2, 10), Some(255));
    assert_eq!(surface.alpha_at(2, 2), Some(0));
}

#[test]
fn empty_run_draws_nothing() {
    let face = BoxFace::new(20.0);
    let run = TextRun::new("", &face);
    let mut surface = SkiaSurface::new(16, 16).unwrap();

    run.render(&mut surface, Color::black()).unwrap();
    assert_eq!(inked_pixels(&surface), 0);
}

#[test]
fn unsupported_baseline_leaves_pixmap_untouched() {
    let face = BoxFace::new(20.0);
    let run = TextRun::builder(&face)
        .text("x")
        .baseline(Baseline::BoundsBottom)
        .build();
    let mut surface = SkiaSurface::new(16, 16).unwrap();

    assert!(run.render(&mut surface, Color::black()).is_err());
    assert_eq!(inked_pixels(&surface), 0);
}

#[test]
fn png_export_has_signature() {
    let face = BoxFace::new(12.0);
    let run = TextRun::builder(&face).text("ok").origin((1.0, 2.0)).build();
    let mut surface = SkiaSurface::new(24, 16).unwrap();
    run.render(&mut surface, Color::black()).unwrap();

    let png = surface.encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
