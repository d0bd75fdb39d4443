use crate::coords::{Rect, Vec2};

use super::Color;
use super::gradient::{BoxGradient, ImagePattern, LinearGradient, RadialGradient};

/// Discriminant of [`Paint`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PaintKind {
    None,
    Linear,
    Radial,
    Box,
    ImagePattern,
}

/// Deferred description of a non-solid fill or stroke.
///
/// A `Paint` is a plain value: it is built by the gradient factories, handed
/// to `fill_style` / `stroke_style`, and only then turned into a rasterizer
/// paint. `Paint::None` is never forwarded; setting it leaves the previous
/// style in place.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Paint {
    #[default]
    None,
    Linear(LinearGradient),
    Radial(RadialGradient),
    Box(BoxGradient),
    ImagePattern(ImagePattern),
}

impl Paint {
    #[inline]
    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32, start: Color, end: Color) -> Self {
        Paint::Linear(LinearGradient::new(Vec2::new(x0, y0), Vec2::new(x1, y1), start, end))
    }

    #[inline]
    pub fn radial(cx: f32, cy: f32, r0: f32, r1: f32, inner: Color, outer: Color) -> Self {
        Paint::Radial(RadialGradient::new(Vec2::new(cx, cy), r0, r1, inner, outer))
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn boxed(
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        feather: f32,
        inner: Color,
        outer: Color,
    ) -> Self {
        Paint::Box(BoxGradient::new(Rect::new(x, y, w, h), radius, feather, inner, outer))
    }

    #[inline]
    pub fn kind(&self) -> PaintKind {
        match self {
            Paint::None => PaintKind::None,
            Paint::Linear(_) => PaintKind::Linear,
            Paint::Radial(_) => PaintKind::Radial,
            Paint::Box(_) => PaintKind::Box,
            Paint::ImagePattern(_) => PaintKind::ImagePattern,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Paint::None)
    }

    /// Gradient parameters in positional order, unused slots zero.
    ///
    /// - linear: `x0 y0 x1 y1`
    /// - radial: `cx cy r0 r1`
    /// - box: `x y w h radius feather`
    /// - image pattern: `ox oy w h angle alpha`
    pub fn geometry(&self) -> [f32; 6] {
        match *self {
            Paint::None => [0.0; 6],
            Paint::Linear(g) => [g.start.x, g.start.y, g.end.x, g.end.y, 0.0, 0.0],
            Paint::Radial(g) => [g.center.x, g.center.y, g.inner_radius, g.outer_radius, 0.0, 0.0],
            Paint::Box(g) => [
                g.rect.x(),
                g.rect.y(),
                g.rect.width(),
                g.rect.height(),
                g.radius,
                g.feather,
            ],
            Paint::ImagePattern(p) => {
                [p.origin.x, p.origin.y, p.size.x, p.size.y, p.angle, p.alpha]
            }
        }
    }

    /// Color at the gradient's start (linear) or inside (radial, box).
    pub fn start_color(&self) -> Option<Color> {
        match self {
            Paint::Linear(g) => Some(g.inner),
            Paint::Radial(g) => Some(g.inner),
            Paint::Box(g) => Some(g.inner),
            Paint::None | Paint::ImagePattern(_) => None,
        }
    }

    /// Color at the gradient's end (linear) or outside (radial, box).
    pub fn end_color(&self) -> Option<Color> {
        match self {
            Paint::Linear(g) => Some(g.outer),
            Paint::Radial(g) => Some(g.outer),
            Paint::Box(g) => Some(g.outer),
            Paint::None | Paint::ImagePattern(_) => None,
        }
    }
}

/// Argument of `fill_style` / `stroke_style`: a solid color or a paint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Style {
    Color(Color),
    Paint(Paint),
}

impl From<Color> for Style {
    #[inline]
    fn from(color: Color) -> Self {
        Style::Color(color)
    }
}

impl From<Paint> for Style {
    #[inline]
    fn from(paint: Paint) -> Self {
        Style::Paint(paint)
    }
}

impl From<&Paint> for Style {
    #[inline]
    fn from(paint: &Paint) -> Self {
        Style::Paint(*paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_geometry_and_colors() {
        let p = Paint::linear(0.0, 0.0, 10.0, 0.0, Color::RED, Color::BLUE);
        assert_eq!(p.kind(), PaintKind::Linear);
        assert_eq!(p.geometry()[..4], [0.0, 0.0, 10.0, 0.0]);
        assert_eq!(p.start_color(), Some(Color::RED));
        assert_eq!(p.end_color(), Some(Color::BLUE));
    }

    #[test]
    fn radial_geometry() {
        let p = Paint::radial(5.0, 6.0, 1.0, 8.0, Color::WHITE, Color::BLACK);
        assert_eq!(p.kind(), PaintKind::Radial);
        assert_eq!(p.geometry(), [5.0, 6.0, 1.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn box_geometry_uses_all_six_slots() {
        let p = Paint::boxed(1.0, 2.0, 30.0, 40.0, 4.0, 9.0, Color::BLACK, Color::TRANSPARENT);
        assert_eq!(p.kind(), PaintKind::Box);
        assert_eq!(p.geometry(), [1.0, 2.0, 30.0, 40.0, 4.0, 9.0]);
    }

    #[test]
    fn degenerate_geometry_is_kept() {
        let p = Paint::radial(0.0, 0.0, -3.0, -1.0, Color::RED, Color::RED);
        assert_eq!(p.geometry()[2..4], [-3.0, -1.0]);
    }

    #[test]
    fn default_is_none_without_colors() {
        let p = Paint::default();
        assert!(p.is_none());
        assert_eq!(p.kind(), PaintKind::None);
        assert_eq!(p.start_color(), None);
    }

    #[test]
    fn style_conversions() {
        assert_eq!(Style::from(Color::RED), Style::Color(Color::RED));
        assert_eq!(Style::from(&Paint::None), Style::Paint(Paint::None));
    }
}
