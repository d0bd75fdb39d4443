use crate::coords::Vec2;
use crate::raster::CreateFlags;

/// Construction parameters for a [`Canvas`](super::Canvas).
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Flags forwarded to the context factory.
    pub flags: CreateFlags,

    /// Logical size; also the frame-start scissor extent.
    pub width: f32,
    pub height: f32,

    /// Device pixel ratio passed to the rasterizer at `begin_frame`.
    pub scale_ratio: f32,

    /// Position of the canvas on the render surface.
    pub origin: Vec2,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            flags: CreateFlags::default(),
            width: 0.0,
            height: 0.0,
            scale_ratio: 1.0,
            origin: Vec2::zero(),
        }
    }
}
