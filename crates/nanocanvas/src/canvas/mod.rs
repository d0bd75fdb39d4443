//! HTML5-canvas-style façade over a [`Rasterizer`].
//!
//! Responsibilities:
//! - own exactly one rasterizer context for the canvas lifetime
//! - translate canvas-local coordinates to surface coordinates
//! - turn `Paint` descriptions into rasterizer paints
//! - track the frame lifecycle and mirror the global alpha
//!
//! Operations are split by concern: path building and drawing in `path`,
//! styles and gradients in `style`, state stack, transforms and clipping in
//! `state`.

mod config;
mod error;
mod path;
mod state;
mod style;


pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use style::{LineCap, LineJoin, Winding};

use crate::coords::{Rect, Vec2};
use crate::raster::{ContextFactory, Rasterizer};

/// Frame lifecycle: `Idle → Open → Idle`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    Open,
}

/// A drawing surface positioned inside a larger render target.
///
/// All path and shape coordinates are local to the canvas origin and are
/// offset before they reach the rasterizer. Transform calls are forwarded
/// untouched: they act on the rasterizer's matrix, not on points.
///
/// The canvas owns its context and is deliberately not `Clone`; dropping the
/// canvas drops (and thereby releases) the context. Use
/// [`into_context`](Self::into_context) to keep the context instead.
///
/// Mutators return `&mut Self` so calls can be chained:
///
/// ```
/// # use nanocanvas::{Canvas, CanvasConfig, Color, RecordingFactory};
/// let mut canvas = Canvas::new(&RecordingFactory, CanvasConfig::new(200.0, 100.0))?;
/// canvas.begin_frame(800.0, 600.0)?;
/// canvas.begin_path().move_to(0.0, 0.0).line_to(50.0, 50.0);
/// canvas.stroke_style(Color::RED)?.stroke();
/// canvas.end_frame()?;
/// # Ok::<(), nanocanvas::CanvasError>(())
/// ```
#[derive(Debug)]
pub struct Canvas<R: Rasterizer> {
    ctx: R,

    width: f32,
    height: f32,
    scale_ratio: f32,
    origin: Vec2,

    /// Mirrors the rasterizer's current global alpha.
    alpha: f32,
    /// Alpha values saved alongside the rasterizer's state stack.
    alpha_stack: Vec<f32>,

    frame: FrameState,
}

impl<R: Rasterizer> Canvas<R> {
    /// Creates a canvas with a fresh context from `factory`.
    ///
    /// Fails with [`CanvasError::InvalidContext`] when the factory fails or
    /// returns a context that reports itself invalid.
    pub fn new<F>(factory: &F, config: CanvasConfig) -> Result<Self>
    where
        F: ContextFactory<Context = R>,
    {
        let ctx = factory.create(config.flags).map_err(CanvasError::InvalidContext)?;
        if !ctx.is_valid() {
            return Err(CanvasError::InvalidContext(anyhow::anyhow!(
                "context factory returned an invalid context"
            )));
        }
        Ok(Self::from_context(ctx, config))
    }

    /// Wraps an existing context. The config's flags are not consulted.
    pub fn from_context(ctx: R, config: CanvasConfig) -> Self {
        log::debug!(
            "canvas created: {}x{} at ({}, {}), ratio {}",
            config.width,
            config.height,
            config.origin.x,
            config.origin.y,
            config.scale_ratio
        );
        Self {
            ctx,
            width: config.width,
            height: config.height,
            scale_ratio: config.scale_ratio,
            origin: config.origin,
            alpha: 1.0,
            alpha_stack: Vec::new(),
            frame: FrameState::Idle,
        }
    }

    // ── properties ────────────────────────────────────────────────────────

    /// Whether the underlying context can still render.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.ctx.is_valid()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Takes effect at the next `begin_frame` scissor and `clear_color`.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Canvas origin on the render surface.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.origin
    }

    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.origin = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn scale_ratio(&self) -> f32 {
        self.scale_ratio
    }

    pub fn set_scale_ratio(&mut self, ratio: f32) -> &mut Self {
        self.scale_ratio = ratio;
        self
    }

    #[inline]
    pub fn frame_state(&self) -> FrameState {
        self.frame
    }

    #[inline]
    pub fn context(&self) -> &R {
        &self.ctx
    }

    /// Direct access to the context. Changes made here bypass coordinate
    /// translation and the alpha mirror.
    #[inline]
    pub fn context_mut(&mut self) -> &mut R {
        &mut self.ctx
    }

    /// Consumes the canvas and hands back its context.
    pub fn into_context(self) -> R {
        self.ctx
    }

    // ── coordinates ───────────────────────────────────────────────────────

    /// Canvas-local point to surface coordinates.
    #[inline]
    pub fn local_to_global(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.origin.x + x, self.origin.y + y)
    }

    /// Canvas-local rectangle to surface coordinates. Only the origin moves.
    #[inline]
    pub fn local_rect_to_global(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).translated(self.origin)
    }

    /// Surface point to canvas-local coordinates.
    #[inline]
    pub fn global_to_local(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.origin.x, y - self.origin.y)
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Opens a frame on a `window_width × window_height` surface.
    ///
    /// The rasterizer resets its render state, then drawing is scissored to
    /// the canvas bounds. Later `clip` calls intersect with that scissor.
    pub fn begin_frame(&mut self, window_width: f32, window_height: f32) -> Result<&mut Self> {
        if self.frame == FrameState::Open {
            return Err(CanvasError::FrameAlreadyOpen);
        }
        log::debug!("begin frame {window_width}x{window_height} @ {}", self.scale_ratio);

        self.ctx.begin_frame(window_width, window_height, self.scale_ratio);
        self.alpha = 1.0;
        self.alpha_stack.clear();
        self.ctx.scissor(self.origin.x, self.origin.y, self.width, self.height);

        self.frame = FrameState::Open;
        Ok(self)
    }

    /// Discards everything drawn since `begin_frame`.
    pub fn cancel_frame(&mut self) -> Result<&mut Self> {
        if self.frame != FrameState::Open {
            return Err(CanvasError::NoActiveFrame);
        }
        log::debug!("cancel frame");
        self.ctx.cancel_frame();
        self.frame = FrameState::Idle;
        Ok(self)
    }

    /// Flushes everything drawn since `begin_frame`.
    pub fn end_frame(&mut self) -> Result<()> {
        if self.frame != FrameState::Open {
            return Err(CanvasError::NoActiveFrame);
        }
        log::debug!("end frame");
        self.ctx.end_frame();
        self.frame = FrameState::Idle;
        Ok(())
    }
}
