use core::fmt;

use bitflags::bitflags;

use crate::paint::Color;

use super::RasterError;

bitflags! {
    /// Options passed to [`ContextFactory::create`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct CreateFlags: u32 {
        /// Geometry based antialiasing (may be unnecessary with MSAA).
        const ANTIALIAS = 1 << 0;
        /// Draw strokes through the stencil buffer so overlapping segments
        /// are only painted once.
        const STENCIL_STROKES = 1 << 1;
        /// Enable additional debug checks in the rasterizer.
        const DEBUG = 1 << 2;
    }
}

impl Default for CreateFlags {
    fn default() -> Self {
        CreateFlags::ANTIALIAS | CreateFlags::STENCIL_STROKES
    }
}

/// Line end and line joint style as understood by the rasterizer.
///
/// Caps use `Butt`, `Round` and `Square`; joins use `Bevel`, `Round` and
/// `Miter`. `Round` is shared.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineStyle {
    Butt,
    Round,
    Square,
    Bevel,
    Miter,
}

/// Sweep direction for arcs and path winding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Counter-clockwise: solid shapes.
    Ccw,
    /// Clockwise: holes.
    Cw,
}

/// An immediate-mode vector rasterizer context.
///
/// The context owns path construction, the render-state stack (transform,
/// scissor, paints, stroke settings, alpha) and frame buffering. All
/// coordinates it receives are surface (global) coordinates, before its own
/// transform is applied.
///
/// Drawing outside `begin_frame` / `end_frame` is implementation-defined.
pub trait Rasterizer {
    /// Rasterizer-side paint object produced by the gradient constructors.
    type Paint: Clone + fmt::Debug;

    /// Returns `false` once the context can no longer render (e.g. lost device).
    fn is_valid(&self) -> bool {
        true
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Starts a frame. Resets the render state and clears queued drawing.
    fn begin_frame(&mut self, window_width: f32, window_height: f32, device_pixel_ratio: f32);
    /// Drops everything queued since `begin_frame`.
    fn cancel_frame(&mut self);
    /// Flushes everything queued since `begin_frame`.
    fn end_frame(&mut self);

    // ── path ──────────────────────────────────────────────────────────────

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32);
    fn arc(&mut self, cx: f32, cy: f32, r: f32, a0: f32, a1: f32, dir: Direction);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32);
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);
    fn circle(&mut self, cx: f32, cy: f32, r: f32);
    fn close_path(&mut self);
    fn path_winding(&mut self, dir: Direction);

    // ── paint ─────────────────────────────────────────────────────────────

    fn fill_color(&mut self, color: Color);
    fn stroke_color(&mut self, color: Color);
    fn fill_paint(&mut self, paint: Self::Paint);
    fn stroke_paint(&mut self, paint: Self::Paint);

    fn linear_gradient(
        &mut self,
        sx: f32,
        sy: f32,
        ex: f32,
        ey: f32,
        inner: Color,
        outer: Color,
    ) -> Self::Paint;
    fn radial_gradient(
        &mut self,
        cx: f32,
        cy: f32,
        inr: f32,
        outr: f32,
        inner: Color,
        outer: Color,
    ) -> Self::Paint;
    #[allow(clippy::too_many_arguments)]
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
    ) -> Self::Paint;

    // ── draw ──────────────────────────────────────────────────────────────

    fn fill(&mut self);
    fn stroke(&mut self);

    // ── stroke style / alpha ──────────────────────────────────────────────

    fn line_cap(&mut self, cap: LineStyle);
    fn line_join(&mut self, join: LineStyle);
    fn stroke_width(&mut self, width: f32);
    fn miter_limit(&mut self, limit: f32);
    fn global_alpha(&mut self, alpha: f32);

    // ── transform ─────────────────────────────────────────────────────────

    fn scale(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn translate(&mut self, x: f32, y: f32);
    /// Premultiplies the current transform by `[a c e; b d f; 0 0 1]`.
    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32);
    fn reset_transform(&mut self);

    // ── scissor ───────────────────────────────────────────────────────────

    fn scissor(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn intersect_scissor(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn reset_scissor(&mut self);

    // ── state stack ───────────────────────────────────────────────────────

    fn save(&mut self) -> Result<(), RasterError>;
    fn restore(&mut self) -> Result<(), RasterError>;
    /// Resets the current state to defaults; stack depth is unchanged.
    fn reset(&mut self);
}

/// Creates rasterizer contexts.
///
/// Passed explicitly to `Canvas::new`. Any `Fn(CreateFlags) -> anyhow::Result<R>`
/// closure qualifies.
pub trait ContextFactory {
    type Context: Rasterizer;

    fn create(&self, flags: CreateFlags) -> anyhow::Result<Self::Context>;
}

impl<F, R> ContextFactory for F
where
    F: Fn(CreateFlags) -> anyhow::Result<R>,
    R: Rasterizer,
{
    type Context = R;

    fn create(&self, flags: CreateFlags) -> anyhow::Result<R> {
        self(flags)
    }
}
