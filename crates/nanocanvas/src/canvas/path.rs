use crate::paint::Color;
use crate::raster::{Direction, Rasterizer};

use super::{Canvas, Result, Winding};

impl<R: Rasterizer> Canvas<R> {
    // ── basic path ────────────────────────────────────────────────────────

    /// Clears the current path.
    pub fn begin_path(&mut self) -> &mut Self {
        self.ctx.begin_path();
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let p = self.local_to_global(x, y);
        self.ctx.move_to(p.x, p.y);
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        let p = self.local_to_global(x, y);
        self.ctx.line_to(p.x, p.y);
        self
    }

    /// Arc of radius `r` tangent to the lines (current → p1) and (p1 → p2).
    pub fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, r: f32) -> &mut Self {
        let p1 = self.local_to_global(x1, y1);
        let p2 = self.local_to_global(x2, y2);
        self.ctx.arc_to(p1.x, p1.y, p2.x, p2.y, r);
        self
    }

    pub fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> &mut Self {
        let c = self.local_to_global(cpx, cpy);
        let p = self.local_to_global(x, y);
        self.ctx.quad_to(c.x, c.y, p.x, p.y);
        self
    }

    pub fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        let c1 = self.local_to_global(cp1x, cp1y);
        let c2 = self.local_to_global(cp2x, cp2y);
        let p = self.local_to_global(x, y);
        self.ctx.bezier_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
        self
    }

    /// Circular arc around `(x, y)` from `start_angle` to `end_angle` (radians).
    pub fn arc(
        &mut self,
        x: f32,
        y: f32,
        r: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) -> &mut Self {
        let c = self.local_to_global(x, y);
        let dir = if counterclockwise { Direction::Ccw } else { Direction::Cw };
        self.ctx.arc(c.x, c.y, r, start_angle, end_angle, dir);
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.ctx.close_path();
        self
    }

    /// Winding of the most recently added sub-path.
    pub fn path_winding(&mut self, winding: Winding) -> &mut Self {
        self.ctx.path_winding(winding.into());
        self
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        let r = self.local_rect_to_global(x, y, w, h);
        self.ctx.rect(r.x(), r.y(), r.width(), r.height());
        self
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) -> &mut Self {
        let rect = self.local_rect_to_global(x, y, w, h);
        self.ctx.rounded_rect(rect.x(), rect.y(), rect.width(), rect.height(), r);
        self
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32) -> &mut Self {
        let c = self.local_to_global(cx, cy);
        self.ctx.circle(c.x, c.y, r);
        self
    }

    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) -> &mut Self {
        let c = self.local_to_global(cx, cy);
        self.ctx.ellipse(c.x, c.y, rx, ry);
        self
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the current path with the fill style.
    pub fn fill(&mut self) -> &mut Self {
        self.ctx.fill();
        self
    }

    /// Strokes the current path with the stroke style.
    pub fn stroke(&mut self) -> &mut Self {
        self.ctx.stroke();
        self
    }

    /// Fills a rectangle. Replaces the current path.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.begin_path().rect(x, y, w, h).fill()
    }

    /// Strokes a rectangle. Replaces the current path.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.begin_path().rect(x, y, w, h).stroke()
    }

    /// Fills the whole canvas with `color`. Replaces the current path; the
    /// fill style and other render state are preserved.
    pub fn clear_color(&mut self, color: Color) -> Result<&mut Self> {
        self.ctx.save()?;
        self.ctx.fill_color(color);
        let (w, h) = (self.width, self.height);
        self.begin_path().rect(0.0, 0.0, w, h).fill();
        self.ctx.restore()?;
        Ok(self)
    }
}
