//! Coordinate and geometry types shared by the canvas and rasterizers.
//!
//! Canonical space:
//! - Logical pixels, scaled to device pixels by the rasterizer
//! - Origin top-left
//! - +X right, +Y down
//!
//! A canvas works in *local* coordinates (relative to its own origin); the
//! rasterizer receives *global* coordinates (relative to the render surface).

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
