use crate::coords::{Rect, Transform2D, Vec2};
use crate::paint::Color;

use super::{
    ContextFactory, CreateFlags, Direction, DrawCall, DrawOp, LineStyle, PathCmd, RasterError,
    Rasterizer, RecordedFrame, RecordedPaint, StrokeParams,
};

/// Capacity of the render-state stack, including the base state.
pub const MAX_STATES: usize = 32;

/// One entry of the render-state stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub transform: Transform2D,
    /// Scissor in surface space (already transformed). `None` = unclipped.
    pub scissor: Option<Rect>,
    pub fill: RecordedPaint,
    pub stroke: RecordedPaint,
    pub stroke_width: f32,
    pub miter_limit: f32,
    pub line_cap: LineStyle,
    pub line_join: LineStyle,
    pub alpha: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            transform: Transform2D::identity(),
            scissor: None,
            fill: RecordedPaint::Solid(Color::WHITE),
            stroke: RecordedPaint::Solid(Color::BLACK),
            stroke_width: 1.0,
            miter_limit: 10.0,
            line_cap: LineStyle::Butt,
            line_join: LineStyle::Miter,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct FrameInfo {
    width: f32,
    height: f32,
    ratio: f32,
}

/// Rasterizer that records draw calls instead of producing pixels.
///
/// Keeps the full render-state stack, scissor and transform like a real
/// immediate-mode rasterizer, so the state a canvas leaves behind can be
/// inspected. Each `fill`/`stroke` is captured as a [`DrawCall`]; `end_frame`
/// moves the frame's calls into [`frames`](Self::frames), `cancel_frame`
/// drops them.
///
/// Drawing outside a frame is queued and then discarded by the next
/// `begin_frame`.
#[derive(Debug)]
pub struct RecordingRasterizer {
    flags: CreateFlags,
    valid: bool,

    /// Never empty; the last entry is the current state.
    states: Vec<RenderState>,
    path: Vec<PathCmd>,

    frame: Option<FrameInfo>,
    pending: Vec<DrawCall>,
    frames: Vec<RecordedFrame>,
    cancelled_frames: usize,
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        Self::with_flags(CreateFlags::default())
    }

    pub fn with_flags(flags: CreateFlags) -> Self {
        Self {
            flags,
            valid: true,
            states: vec![RenderState::default()],
            path: Vec::new(),
            frame: None,
            pending: Vec::new(),
            frames: Vec::new(),
            cancelled_frames: 0,
        }
    }

    #[inline]
    pub fn flags(&self) -> CreateFlags {
        self.flags
    }

    /// Simulates a lost device: [`is_valid`](Rasterizer::is_valid) reports
    /// `false` afterwards.
    pub fn lose_context(&mut self) {
        log::debug!("recording rasterizer: context lost");
        self.valid = false;
    }

    /// Current render state (top of the stack).
    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.states[self.states.len() - 1]
    }

    /// Number of states on the stack, including the base state.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Path commands accumulated since the last `begin_path`.
    #[inline]
    pub fn current_path(&self) -> &[PathCmd] {
        &self.path
    }

    /// Draw calls queued in the open frame.
    #[inline]
    pub fn pending(&self) -> &[DrawCall] {
        &self.pending
    }

    #[inline]
    pub fn is_frame_open(&self) -> bool {
        self.frame.is_some()
    }

    /// Frames flushed so far, oldest first.
    #[inline]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    /// Removes and returns every flushed frame.
    pub fn take_frames(&mut self) -> Vec<RecordedFrame> {
        std::mem::take(&mut self.frames)
    }

    #[inline]
    pub fn cancelled_frames(&self) -> usize {
        self.cancelled_frames
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn state_mut(&mut self) -> &mut RenderState {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    #[inline]
    fn push_path(&mut self, cmd: PathCmd) {
        self.path.push(cmd);
    }

    fn push_draw(&mut self, op: DrawOp, paint: RecordedPaint) {
        let state = *self.state();
        self.pending.push(DrawCall {
            op,
            path: self.path.clone(),
            paint,
            transform: state.transform,
            scissor: state.scissor,
            alpha: state.alpha,
        });
    }

    fn premultiply(&mut self, t: Transform2D) {
        self.state_mut().transform.premultiply(&t);
    }
}

impl Default for RecordingRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for RecordingRasterizer {
    type Paint = RecordedPaint;

    fn is_valid(&self) -> bool {
        self.valid
    }

    // ── frame ─────────────────────────────────────────────────────────────

    fn begin_frame(&mut self, window_width: f32, window_height: f32, device_pixel_ratio: f32) {
        if !self.pending.is_empty() {
            log::debug!(
                "recording rasterizer: discarding {} draw call(s) issued outside a frame",
                self.pending.len()
            );
        }
        self.states.clear();
        self.states.push(RenderState::default());
        self.path.clear();
        self.pending.clear();
        self.frame = Some(FrameInfo {
            width: window_width,
            height: window_height,
            ratio: device_pixel_ratio,
        });
    }

    fn cancel_frame(&mut self) {
        self.pending.clear();
        self.path.clear();
        if self.frame.take().is_some() {
            self.cancelled_frames += 1;
        }
    }

    fn end_frame(&mut self) {
        let Some(info) = self.frame.take() else {
            log::debug!("recording rasterizer: end_frame without begin_frame ignored");
            return;
        };
        self.frames.push(RecordedFrame {
            window_width: info.width,
            window_height: info.height,
            device_pixel_ratio: info.ratio,
            draws: std::mem::take(&mut self.pending),
        });
    }

    // ── path ──────────────────────────────────────────────────────────────

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push_path(PathCmd::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push_path(PathCmd::LineTo(Vec2::new(x, y)));
    }

    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.push_path(PathCmd::BezierTo {
            c1: Vec2::new(c1x, c1y),
            c2: Vec2::new(c2x, c2y),
            to: Vec2::new(x, y),
        });
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push_path(PathCmd::QuadTo { c: Vec2::new(cx, cy), to: Vec2::new(x, y) });
    }

    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        self.push_path(PathCmd::ArcTo { p1: Vec2::new(x1, y1), p2: Vec2::new(x2, y2), radius });
    }

    fn arc(&mut self, cx: f32, cy: f32, r: f32, a0: f32, a1: f32, dir: Direction) {
        self.push_path(PathCmd::Arc { center: Vec2::new(cx, cy), radius: r, a0, a1, dir });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push_path(PathCmd::Rect(Rect::new(x, y, w, h)));
    }

    fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        self.push_path(PathCmd::RoundedRect { rect: Rect::new(x, y, w, h), radius: r });
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.push_path(PathCmd::Ellipse { center: Vec2::new(cx, cy), rx, ry });
    }

    fn circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.push_path(PathCmd::Circle { center: Vec2::new(cx, cy), radius: r });
    }

    fn close_path(&mut self) {
        self.push_path(PathCmd::Close);
    }

    fn path_winding(&mut self, dir: Direction) {
        self.push_path(PathCmd::Winding(dir));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    fn fill_color(&mut self, color: Color) {
        self.state_mut().fill = RecordedPaint::Solid(color);
    }

    fn stroke_color(&mut self, color: Color) {
        self.state_mut().stroke = RecordedPaint::Solid(color);
    }

    fn fill_paint(&mut self, paint: RecordedPaint) {
        self.state_mut().fill = paint;
    }

    fn stroke_paint(&mut self, paint: RecordedPaint) {
        self.state_mut().stroke = paint;
    }

    fn linear_gradient(
        &mut self,
        sx: f32,
        sy: f32,
        ex: f32,
        ey: f32,
        inner: Color,
        outer: Color,
    ) -> RecordedPaint {
        RecordedPaint::Linear { start: Vec2::new(sx, sy), end: Vec2::new(ex, ey), inner, outer }
    }

    fn radial_gradient(
        &mut self,
        cx: f32,
        cy: f32,
        inr: f32,
        outr: f32,
        inner: Color,
        outer: Color,
    ) -> RecordedPaint {
        RecordedPaint::Radial {
            center: Vec2::new(cx, cy),
            inner_radius: inr,
            outer_radius: outr,
            inner,
            outer,
        }
    }

    fn box_gradient(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        r: f32,
        feather: f32,
        inner: Color,
        outer: Color,
    ) -> RecordedPaint {
        RecordedPaint::Box { rect: Rect::new(x, y, w, h), radius: r, feather, inner, outer }
    }

    // ── draw ──────────────────────────────────────────────────────────────

    fn fill(&mut self) {
        let paint = self.state().fill;
        self.push_draw(DrawOp::Fill, paint);
    }

    fn stroke(&mut self) {
        let state = *self.state();
        let params = StrokeParams {
            width: state.stroke_width,
            miter_limit: state.miter_limit,
            cap: state.line_cap,
            join: state.line_join,
        };
        self.push_draw(DrawOp::Stroke(params), state.stroke);
    }

    // ── stroke style / alpha ──────────────────────────────────────────────

    fn line_cap(&mut self, cap: LineStyle) {
        self.state_mut().line_cap = cap;
    }

    fn line_join(&mut self, join: LineStyle) {
        self.state_mut().line_join = join;
    }

    fn stroke_width(&mut self, width: f32) {
        self.state_mut().stroke_width = width;
    }

    fn miter_limit(&mut self, limit: f32) {
        self.state_mut().miter_limit = limit;
    }

    fn global_alpha(&mut self, alpha: f32) {
        self.state_mut().alpha = alpha;
    }

    // ── transform ─────────────────────────────────────────────────────────

    fn scale(&mut self, x: f32, y: f32) {
        self.premultiply(Transform2D::scaling(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.premultiply(Transform2D::rotation(angle));
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.premultiply(Transform2D::translation(x, y));
    }

    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.premultiply(Transform2D::new(a, b, c, d, e, f));
    }

    fn reset_transform(&mut self) {
        self.state_mut().transform = Transform2D::identity();
    }

    // ── scissor ───────────────────────────────────────────────────────────

    fn scissor(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let state = self.state_mut();
        let rect = state.transform.apply_rect_bounds(Rect::new(x, y, w.max(0.0), h.max(0.0)));
        state.scissor = Some(rect);
        log::trace!("recording rasterizer: scissor {rect:?}");
    }

    fn intersect_scissor(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let Some(current) = self.state().scissor else {
            self.scissor(x, y, w, h);
            return;
        };
        let state = self.state_mut();
        let rect = state.transform.apply_rect_bounds(Rect::new(x, y, w.max(0.0), h.max(0.0)));
        // No overlap: keep a zero-area scissor so subsequent drawing is culled.
        let effective = current.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        state.scissor = Some(effective);
        log::trace!("recording rasterizer: scissor {effective:?}");
    }

    fn reset_scissor(&mut self) {
        self.state_mut().scissor = None;
    }

    // ── state stack ───────────────────────────────────────────────────────

    fn save(&mut self) -> Result<(), RasterError> {
        if self.states.len() >= MAX_STATES {
            return Err(RasterError::StateStackOverflow { limit: MAX_STATES });
        }
        let top = *self.state();
        self.states.push(top);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), RasterError> {
        if self.states.len() <= 1 {
            return Err(RasterError::StateStackUnderflow);
        }
        self.states.pop();
        Ok(())
    }

    fn reset(&mut self) {
        *self.state_mut() = RenderState::default();
    }
}

/// Factory producing [`RecordingRasterizer`] contexts.
#[derive(Debug, Copy, Clone, Default)]
pub struct RecordingFactory;

impl ContextFactory for RecordingFactory {
    type Context = RecordingRasterizer;

    fn create(&self, flags: CreateFlags) -> anyhow::Result<RecordingRasterizer> {
        log::debug!("creating recording rasterizer context (flags: {flags:?})");
        Ok(RecordingRasterizer::with_flags(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> RecordingRasterizer {
        let mut r = RecordingRasterizer::new();
        r.begin_frame(800.0, 600.0, 2.0);
        r
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn end_frame_flushes_queued_draws() {
        let mut r = open();
        r.rect(0.0, 0.0, 10.0, 10.0);
        r.fill();
        r.end_frame();

        let frame = r.last_frame().unwrap();
        assert_eq!(frame.device_pixel_ratio, 2.0);
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(frame.draws[0].path, vec![PathCmd::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))]);
        assert!(r.pending().is_empty());
    }

    #[test]
    fn cancel_frame_discards() {
        let mut r = open();
        r.rect(0.0, 0.0, 10.0, 10.0);
        r.fill();
        r.cancel_frame();

        assert!(r.frames().is_empty());
        assert_eq!(r.cancelled_frames(), 1);
        assert!(!r.is_frame_open());
    }

    #[test]
    fn begin_frame_resets_state_stack() {
        let mut r = open();
        r.save().unwrap();
        r.global_alpha(0.5);
        r.begin_frame(800.0, 600.0, 1.0);

        assert_eq!(r.depth(), 1);
        assert_eq!(*r.state(), RenderState::default());
    }

    #[test]
    fn draws_outside_frame_are_dropped_at_next_begin() {
        let mut r = RecordingRasterizer::new();
        r.rect(0.0, 0.0, 1.0, 1.0);
        r.fill();
        r.begin_frame(10.0, 10.0, 1.0);
        r.end_frame();
        assert!(r.last_frame().unwrap().draws.is_empty());
    }

    // ── state stack ───────────────────────────────────────────────────────

    #[test]
    fn restore_without_save_underflows() {
        let mut r = open();
        assert_eq!(r.restore(), Err(RasterError::StateStackUnderflow));
    }

    #[test]
    fn save_is_bounded() {
        let mut r = open();
        for _ in 1..MAX_STATES {
            r.save().unwrap();
        }
        assert_eq!(r.save(), Err(RasterError::StateStackOverflow { limit: MAX_STATES }));
    }

    #[test]
    fn restore_brings_back_saved_state() {
        let mut r = open();
        r.fill_color(Color::RED);
        r.save().unwrap();
        r.fill_color(Color::BLUE);
        r.translate(5.0, 5.0);
        r.restore().unwrap();

        assert_eq!(r.state().fill, RecordedPaint::Solid(Color::RED));
        assert!(r.state().transform.is_identity());
    }

    #[test]
    fn reset_keeps_depth() {
        let mut r = open();
        r.save().unwrap();
        r.stroke_width(4.0);
        r.reset();
        assert_eq!(r.depth(), 2);
        assert_eq!(r.state().stroke_width, 1.0);
    }

    // ── scissor ───────────────────────────────────────────────────────────

    #[test]
    fn intersect_scissor_narrows() {
        let mut r = open();
        r.scissor(10.0, 10.0, 100.0, 100.0);
        r.intersect_scissor(10.0, 10.0, 50.0, 50.0);
        assert_eq!(r.state().scissor, Some(Rect::new(10.0, 10.0, 50.0, 50.0)));
    }

    #[test]
    fn intersect_without_scissor_sets_it() {
        let mut r = open();
        r.intersect_scissor(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.state().scissor, Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn disjoint_scissor_becomes_empty() {
        let mut r = open();
        r.scissor(0.0, 0.0, 10.0, 10.0);
        r.intersect_scissor(50.0, 50.0, 10.0, 10.0);
        assert!(r.state().scissor.unwrap().is_empty());
    }

    #[test]
    fn scissor_follows_transform() {
        let mut r = open();
        r.translate(5.0, 0.0);
        r.scale(2.0, 2.0);
        r.scissor(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.state().scissor, Some(Rect::new(5.0, 0.0, 20.0, 20.0)));
    }

    // ── draw snapshots ────────────────────────────────────────────────────

    #[test]
    fn stroke_captures_stroke_settings() {
        let mut r = open();
        r.stroke_width(3.0);
        r.line_cap(LineStyle::Round);
        r.line_join(LineStyle::Bevel);
        r.move_to(0.0, 0.0);
        r.line_to(5.0, 5.0);
        r.stroke();

        let call = &r.pending()[0];
        assert_eq!(
            call.op,
            DrawOp::Stroke(StrokeParams {
                width: 3.0,
                miter_limit: 10.0,
                cap: LineStyle::Round,
                join: LineStyle::Bevel,
            })
        );
        assert_eq!(call.paint, RecordedPaint::Solid(Color::BLACK));
    }

    #[test]
    fn factory_passes_flags_through() {
        let ctx = RecordingFactory.create(CreateFlags::DEBUG).unwrap();
        assert_eq!(ctx.flags(), CreateFlags::DEBUG);
        assert!(ctx.is_valid());
    }
}
