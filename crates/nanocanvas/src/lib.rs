//! Canvas-style 2D drawing over an immediate-mode vector rasterizer.
//!
//! A [`Canvas`] owns one [`Rasterizer`] context and exposes the familiar
//! HTML5 canvas operations (paths, fills, strokes, gradients, transforms,
//! clipping) in canvas-local coordinates. [`RecordingRasterizer`] is a
//! headless rasterizer that captures draw calls per frame.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;

pub use canvas::{Canvas, CanvasConfig, CanvasError, FrameState, LineCap, LineJoin, Winding};
pub use coords::{Rect, Transform2D, Vec2};
pub use paint::{Color, Paint, PaintKind, Style};
pub use raster::{
    ContextFactory, CreateFlags, RasterError, Rasterizer, RecordingFactory, RecordingRasterizer,
};
