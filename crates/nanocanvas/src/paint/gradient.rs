use crate::coords::{Rect, Vec2};

use super::Color;

/// Two-color linear gradient from `start` (painted `inner`) to `end`
/// (painted `outer`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub inner: Color,
    pub outer: Color,
}

impl LinearGradient {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, inner: Color, outer: Color) -> Self {
        Self { start, end, inner, outer }
    }
}

/// Two-color radial gradient around `center`.
///
/// `inner` fills up to `inner_radius`, `outer` from `outer_radius` outward.
/// Radii are not validated; degenerate values reach the rasterizer as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub inner: Color,
    pub outer: Color,
}

impl RadialGradient {
    #[inline]
    pub fn new(
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    ) -> Self {
        Self { center, inner_radius, outer_radius, inner, outer }
    }
}

/// Feathered rounded-rectangle gradient, typically used for drop shadows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxGradient {
    pub rect: Rect,
    /// Corner radius.
    pub radius: f32,
    /// Width of the blurred border between `inner` and `outer`.
    pub feather: f32,
    pub inner: Color,
    pub outer: Color,
}

impl BoxGradient {
    #[inline]
    pub fn new(rect: Rect, radius: f32, feather: f32, inner: Color, outer: Color) -> Self {
        Self { rect, radius, feather, inner, outer }
    }
}

/// Opaque handle to an image owned by the rasterizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ImageId(pub u32);

/// Image pattern fill. Carried by [`Paint`](super::Paint) but not yet
/// installable: style setters reject it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImagePattern {
    pub image: ImageId,
    pub origin: Vec2,
    pub size: Vec2,
    pub angle: f32,
    pub alpha: f32,
}
