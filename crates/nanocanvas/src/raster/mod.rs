//! Rasterizer collaborator contract.
//!
//! This module is responsible for:
//! - the `Rasterizer` trait a canvas forwards every call to
//! - the `ContextFactory` that creates one rasterizer context per canvas
//! - a recording implementation used for headless rendering and tests
//!
//! Tessellation, antialiasing and GPU submission belong to concrete
//! rasterizers and are not modelled here.

mod context;
mod error;
mod frame;
mod recording;

pub use context::{ContextFactory, CreateFlags, Direction, LineStyle, Rasterizer};
pub use error::RasterError;
pub use frame::{DrawCall, DrawOp, PathCmd, RecordedFrame, RecordedPaint, StrokeParams};
pub use recording::{MAX_STATES, RecordingFactory, RecordingRasterizer, RenderState};
