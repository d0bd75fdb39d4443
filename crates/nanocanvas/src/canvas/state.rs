use crate::raster::Rasterizer;

use super::{Canvas, Result};

impl<R: Rasterizer> Canvas<R> {
    // ── state stack ───────────────────────────────────────────────────────

    /// Pushes a copy of the current render state.
    ///
    /// Must be paired with [`restore`](Self::restore).
    pub fn save(&mut self) -> Result<&mut Self> {
        self.ctx.save()?;
        self.alpha_stack.push(self.alpha);
        Ok(self)
    }

    /// Pops the most recently saved render state.
    ///
    /// Fails with the rasterizer's error when there is no matching `save`.
    pub fn restore(&mut self) -> Result<&mut Self> {
        self.ctx.restore()?;
        if let Some(alpha) = self.alpha_stack.pop() {
            self.alpha = alpha;
        }
        Ok(self)
    }

    /// Resets the current render state to defaults. Stack depth is unchanged.
    pub fn reset(&mut self) -> &mut Self {
        self.ctx.reset();
        self.alpha = 1.0;
        self
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.ctx.scale(x, y);
        self
    }

    /// Rotates by `angle` radians.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        self.ctx.rotate(angle);
        self
    }

    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.ctx.translate(x, y);
        self
    }

    /// Multiplies the current transform by
    ///
    /// ```text
    /// [a c e]
    /// [b d f]
    /// [0 0 1]
    /// ```
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> &mut Self {
        self.ctx.transform(a, b, c, d, e, f);
        self
    }

    /// Replaces the current transform.
    pub fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> &mut Self {
        self.ctx.reset_transform();
        self.ctx.transform(a, b, c, d, e, f);
        self
    }

    pub fn reset_transform(&mut self) -> &mut Self {
        self.ctx.reset_transform();
        self
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Intersects the current clip with a canvas-local rectangle.
    pub fn clip(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        let r = self.local_rect_to_global(x, y, w, h);
        self.ctx.intersect_scissor(r.x(), r.y(), r.width(), r.height());
        self
    }

    /// Removes all clipping, including the frame-start canvas bounds.
    pub fn reset_clip(&mut self) -> &mut Self {
        self.ctx.reset_scissor();
        self
    }
}
