//! Error types for Typeline

use thiserror::Error;

use crate::types::Baseline;

pub type Result<T> = std::result::Result<T, TypelineError>;

/// Main error type for Typeline
///
/// Every variant is a fault, not a transient condition: the operation that
/// raised it produced no partial output and retrying will not help.
#[derive(Debug, Error)]
pub enum TypelineError {
    /// The per-glyph walk only knows the `Text`, `BoundsTop` and
    /// `BoundsCenter` baselines.
    #[error("Baseline {0:?} is not supported when laying out glyphs")]
    UnsupportedBaseline(Baseline),

    #[error("Carriage return at character {index}: normalize line endings to '\\n' first")]
    CarriageReturn { index: usize },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Errors reported by a rendering surface
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to build path from vertex commands")]
    PathBuildingFailed,

    #[error("Failed to create pixmap")]
    PixmapCreationFailed,

    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
