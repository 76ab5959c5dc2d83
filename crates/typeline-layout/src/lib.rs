//! Typeline Layout: from a string to placed glyphs and back
//!
//! The engine behind a [`TextRun`]:
//!
//! 1. **Measurement** ([`measure`]) - widths and heights of character ranges,
//!    kerning included, with the whole-text size cached on the run
//! 2. **Wrapping** ([`wrap`]) - greedy word wrap under a pixel budget
//! 3. **Placement** ([`vertices`]) - lazy vertex streams or raster blits,
//!    justified per line and stacked one em apart
//! 4. **Hit testing** ([`hit_test`]) - the character boundary under a point
//!
//! ```
//! use typeline_layout::{BoxFace, TextRun};
//! use typeline_core::types::Justification;
//!
//! let face = BoxFace::new(12.0);
//! let run = TextRun::builder(&face)
//!     .text("Hello\nWorld")
//!     .justification(Justification::Center)
//!     .build();
//!
//! assert_eq!(run.count_all_lines(), 2);
//! let commands: Vec<_> = run.vertices()?.collect();
//! assert!(commands.last().is_some_and(|c| c.is_stop()));
//! # Ok::<(), typeline_core::TypelineError>(())
//! ```

pub mod box_face;
pub mod measure;
pub mod text_run;
pub mod vertices;
pub mod wrap;

pub use box_face::BoxFace;
pub use text_run::{TextRun, TextRunBuilder};
pub use vertices::{GlyphBlits, Vertices};
pub use wrap::{insert_line_breaks, join_with_breaks, wrap_lines};
