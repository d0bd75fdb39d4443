use crate::coords::{Rect, Transform2D, Vec2};
use crate::paint::Color;

use super::{Direction, LineStyle};

/// A path command exactly as the rasterizer received it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    BezierTo { c1: Vec2, c2: Vec2, to: Vec2 },
    QuadTo { c: Vec2, to: Vec2 },
    ArcTo { p1: Vec2, p2: Vec2, radius: f32 },
    Arc { center: Vec2, radius: f32, a0: f32, a1: f32, dir: Direction },
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f32 },
    Ellipse { center: Vec2, rx: f32, ry: f32 },
    Circle { center: Vec2, radius: f32 },
    Winding(Direction),
    Close,
}

/// Paint object of the recording rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RecordedPaint {
    Solid(Color),
    Linear {
        start: Vec2,
        end: Vec2,
        inner: Color,
        outer: Color,
    },
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    },
    Box {
        rect: Rect,
        radius: f32,
        feather: f32,
        inner: Color,
        outer: Color,
    },
}

/// Stroke settings captured with a stroke draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeParams {
    pub width: f32,
    pub miter_limit: f32,
    pub cap: LineStyle,
    pub join: LineStyle,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawOp {
    Fill,
    Stroke(StrokeParams),
}

/// One fill or stroke with a snapshot of the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub op: DrawOp,
    pub path: Vec<PathCmd>,
    pub paint: RecordedPaint,
    pub transform: Transform2D,
    /// Effective scissor in surface space. `None` = unclipped.
    pub scissor: Option<Rect>,
    pub alpha: f32,
}

impl DrawCall {
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self.op, DrawOp::Fill)
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        matches!(self.op, DrawOp::Stroke(_))
    }
}

/// Draw calls flushed by one `end_frame`, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub window_width: f32,
    pub window_height: f32,
    pub device_pixel_ratio: f32,
    pub draws: Vec<DrawCall>,
}
