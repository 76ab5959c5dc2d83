//! End-to-end rendering of laid-out runs into SVG documents

use typeline_core::{Color, RenderError, RenderMode, TypelineError};
use typeline_layout::{BoxFace, TextRun};
use typeline_render_svg::SvgSurface;

#[test]
fn each_run_becomes_one_path() {
    let face = BoxFace::new(10.0);
    let mut surface = SvgSurface::new(200.0, 100.0);

    TextRun::new("ab\ncd", &face)
        .render(&mut surface, Color::black())
        .unwrap();
    assert_eq!(surface.path_count(), 1);

    TextRun::new("ef", &face)
        .render(&mut surface, Color::black())
        .unwrap();
    assert_eq!(surface.path_count(), 2);

    let svg = surface.finish().unwrap();
    assert_eq!(svg.matches("<path").count(), 2);
}

#[test]
fn origin_shows_up_in_path_data() {
    let face = BoxFace::new(10.0);
    let run = TextRun::builder(&face).text("a").origin((100.0, 50.0)).build();
    let mut surface = SvgSurface::new(200.0, 100.0);

    run.render(&mut surface, Color::rgba(0, 128, 0, 255)).unwrap();

    // Box 'a' starts half a unit right of the pen.
    let svg = surface.finish().unwrap();
    assert!(svg.contains("M100.5"), "{svg}");
    assert!(svg.contains(r#"fill="rgb(0,128,0)""#));
}

#[test]
fn blank_run_adds_no_path() {
    let face = BoxFace::new(10.0);
    let mut surface = SvgSurface::new(50.0, 50.0);

    TextRun::new("  \n ", &face)
        .render(&mut surface, Color::black())
        .unwrap();
    assert_eq!(surface.path_count(), 0);
}

#[test]
fn bitmap_run_is_not_supported() {
    let face = BoxFace::new(10.0);
    let run = TextRun::builder(&face)
        .text("a")
        .render_mode(RenderMode::Bitmap)
        .build();
    let mut surface = SvgSurface::new(50.0, 50.0);

    let err = run.render(&mut surface, Color::black()).unwrap_err();
    assert!(matches!(err, TypelineError::Render(RenderError::FormatNotSupported(_))));
    assert_eq!(surface.path_count(), 0);
}
