//! Paint model shared between the canvas and rasterizers.
//!
//! Scope:
//! - color representation (packed straight-alpha RGBA8)
//! - paint descriptions (gradients, reserved image pattern)
//! - the `Style` argument accepted by fill/stroke setters
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
mod style;

pub use color::Color;
pub use gradient::{BoxGradient, ImageId, ImagePattern, LinearGradient, RadialGradient};
pub use style::{Paint, PaintKind, Style};
