use std::fmt;

use crate::paint::PaintKind;
use crate::raster::RasterError;

/// Error returned by fallible canvas operations.
#[derive(Debug)]
pub enum CanvasError {
    /// The context factory failed or produced an unusable context.
    InvalidContext(anyhow::Error),
    /// The rasterizer rejected an operation (e.g. unmatched `restore`).
    Raster(RasterError),
    /// The paint cannot be installed as a fill or stroke style.
    UnsupportedPaintKind(PaintKind),
    /// A raw integer did not name a variant of the given enum.
    InvalidEnumValue { kind: &'static str, value: i32 },
    /// `begin_frame` while a frame is already open.
    FrameAlreadyOpen,
    /// `cancel_frame` / `end_frame` without an open frame.
    NoActiveFrame,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContext(e) => write!(f, "invalid rasterizer context: {e:#}"),
            Self::Raster(e) => write!(f, "rasterizer error: {e}"),
            Self::UnsupportedPaintKind(kind) => write!(f, "paint kind {kind:?} is not supported"),
            Self::InvalidEnumValue { kind, value } => write!(f, "{value} is not a valid {kind}"),
            Self::FrameAlreadyOpen => f.write_str("a frame is already open"),
            Self::NoActiveFrame => f.write_str("no frame is open"),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidContext(e) => Some(e.as_ref()),
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for CanvasError {
    #[inline]
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

/// Convenience result type.
pub type Result<T, E = CanvasError> = std::result::Result<T, E>;
