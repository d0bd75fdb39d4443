use crate::paint::{Color, Paint, PaintKind, Style};
use crate::raster::{Direction, LineStyle, Rasterizer};

use super::{Canvas, CanvasError, Result};

/// Shape drawn at the ends of open sub-paths.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum LineCap {
    /// Flat edge at the end point.
    #[default]
    Butt,
    /// Half circle past the end point.
    Round,
    /// Half square past the end point.
    Square,
}

/// Shape drawn where two segments meet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum LineJoin {
    #[default]
    Bevel,
    Round,
    Miter,
}

/// Sub-path winding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Winding {
    /// Counter-clockwise: solid shapes.
    Ccw,
    /// Clockwise: holes.
    #[default]
    Cw,
}

impl From<LineCap> for LineStyle {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => LineStyle::Butt,
            LineCap::Round => LineStyle::Round,
            LineCap::Square => LineStyle::Square,
        }
    }
}

impl From<LineJoin> for LineStyle {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Bevel => LineStyle::Bevel,
            LineJoin::Round => LineStyle::Round,
            LineJoin::Miter => LineStyle::Miter,
        }
    }
}

impl From<Winding> for Direction {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::Ccw => Direction::Ccw,
            Winding::Cw => Direction::Cw,
        }
    }
}

// Raw values as used by host bindings: caps and joins count from 0,
// winding uses CCW = 1, CW = 2.

impl TryFrom<i32> for LineCap {
    type Error = CanvasError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(LineCap::Butt),
            1 => Ok(LineCap::Round),
            2 => Ok(LineCap::Square),
            _ => Err(CanvasError::InvalidEnumValue { kind: "LineCap", value }),
        }
    }
}

impl TryFrom<i32> for LineJoin {
    type Error = CanvasError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(LineJoin::Bevel),
            1 => Ok(LineJoin::Round),
            2 => Ok(LineJoin::Miter),
            _ => Err(CanvasError::InvalidEnumValue { kind: "LineJoin", value }),
        }
    }
}

impl TryFrom<i32> for Winding {
    type Error = CanvasError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Winding::Ccw),
            2 => Ok(Winding::Cw),
            _ => Err(CanvasError::InvalidEnumValue { kind: "Winding", value }),
        }
    }
}

impl<R: Rasterizer> Canvas<R> {
    // ── stroke settings ───────────────────────────────────────────────────

    pub fn line_cap(&mut self, cap: LineCap) -> &mut Self {
        self.ctx.line_cap(cap.into());
        self
    }

    pub fn line_join(&mut self, join: LineJoin) -> &mut Self {
        self.ctx.line_join(join.into());
        self
    }

    pub fn line_width(&mut self, width: f32) -> &mut Self {
        self.ctx.stroke_width(width);
        self
    }

    pub fn miter_limit(&mut self, limit: f32) -> &mut Self {
        self.ctx.miter_limit(limit);
        self
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    /// Sets the transparency multiplied into every following fill and stroke.
    pub fn set_global_alpha(&mut self, alpha: f32) -> &mut Self {
        self.alpha = alpha;
        self.ctx.global_alpha(alpha);
        self
    }

    /// The global alpha currently in effect.
    #[inline]
    pub fn global_alpha(&self) -> f32 {
        self.alpha
    }

    // ── fill / stroke style ───────────────────────────────────────────────

    /// Sets the fill to a color or paint.
    ///
    /// `Paint::None` leaves the current fill unchanged. Image patterns are
    /// rejected with [`CanvasError::UnsupportedPaintKind`].
    pub fn fill_style(&mut self, style: impl Into<Style>) -> Result<&mut Self> {
        match style.into() {
            Style::Color(color) => self.ctx.fill_color(color),
            Style::Paint(paint) => {
                if let Some(p) = self.build_paint(&paint)? {
                    self.ctx.fill_paint(p);
                }
            }
        }
        Ok(self)
    }

    /// Sets the stroke to a color or paint. Same rules as [`fill_style`](Self::fill_style).
    pub fn stroke_style(&mut self, style: impl Into<Style>) -> Result<&mut Self> {
        match style.into() {
            Style::Color(color) => self.ctx.stroke_color(color),
            Style::Paint(paint) => {
                if let Some(p) = self.build_paint(&paint)? {
                    self.ctx.stroke_paint(p);
                }
            }
        }
        Ok(self)
    }

    /// Rasterizer paint for `paint`, or `None` for `Paint::None`.
    fn build_paint(&mut self, paint: &Paint) -> Result<Option<R::Paint>> {
        let built = match *paint {
            Paint::None => return Ok(None),
            Paint::Linear(g) => {
                self.ctx.linear_gradient(g.start.x, g.start.y, g.end.x, g.end.y, g.inner, g.outer)
            }
            Paint::Radial(g) => self.ctx.radial_gradient(
                g.center.x,
                g.center.y,
                g.inner_radius,
                g.outer_radius,
                g.inner,
                g.outer,
            ),
            Paint::Box(g) => self.ctx.box_gradient(
                g.rect.x(),
                g.rect.y(),
                g.rect.width(),
                g.rect.height(),
                g.radius,
                g.feather,
                g.inner,
                g.outer,
            ),
            Paint::ImagePattern(p) => {
                log::warn!("image pattern paints are not supported (image {:?})", p.image);
                return Err(CanvasError::UnsupportedPaintKind(PaintKind::ImagePattern));
            }
        };
        Ok(Some(built))
    }

    // ── gradient factories ────────────────────────────────────────────────

    /// Linear gradient from `(x0, y0)` to `(x1, y1)`.
    ///
    /// Gradient coordinates are rasterizer (surface) coordinates and are not
    /// offset by the canvas origin; convert local points with
    /// [`local_to_global`](Self::local_to_global) first.
    pub fn create_linear_gradient(
        &self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        start: Color,
        end: Color,
    ) -> Paint {
        Paint::linear(x0, y0, x1, y1, start, end)
    }

    /// Radial gradient around `(cx, cy)` between radii `r0` and `r1`.
    pub fn create_radial_gradient(
        &self,
        cx: f32,
        cy: f32,
        r0: f32,
        r1: f32,
        inner: Color,
        outer: Color,
    ) -> Paint {
        Paint::radial(cx, cy, r0, r1, inner, outer)
    }

    /// Feathered rounded-rectangle gradient.
    #[allow(clippy::too_many_arguments)]
    pub fn create_box_gradient(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        feather: f32,
        inner: Color,
        outer: Color,
    ) -> Paint {
        Paint::boxed(x, y, w, h, radius, feather, inner, outer)
    }
}
