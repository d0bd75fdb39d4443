use super::{Rect, Vec2};

/// 2D affine transform stored as `[a, b, c, d, e, f]`.
///
/// The matrix is interpreted as
///
/// ```text
/// [a c e]
/// [b d f]
/// [0 0 1]
/// ```
///
/// so a point maps to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D(pub [f32; 6]);

impl Transform2D {
    #[inline]
    pub const fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self([a, b, c, d, e, f])
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// Rotation by `angle` radians (clockwise on a +Y-down surface).
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        let (sn, cs) = angle.sin_cos();
        Self([cs, sn, -sn, cs, 0.0, 0.0])
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// `self = self` followed by `other`.
    pub fn multiply(&mut self, other: &Transform2D) {
        let t = self.0;
        let s = other.0;
        self.0 = [
            t[0] * s[0] + t[1] * s[2],
            t[0] * s[1] + t[1] * s[3],
            t[2] * s[0] + t[3] * s[2],
            t[2] * s[1] + t[3] * s[3],
            t[4] * s[0] + t[5] * s[2] + s[4],
            t[4] * s[1] + t[5] * s[3] + s[5],
        ];
    }

    /// `self = other` followed by `self`.
    ///
    /// This is how canvas-style `translate`/`scale`/`rotate` compose: the new
    /// operation applies to points before everything already in the matrix.
    pub fn premultiply(&mut self, other: &Transform2D) {
        let mut s = *other;
        s.multiply(self);
        *self = s;
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let t = &self.0;
        Vec2::new(p.x * t[0] + p.y * t[2] + t[4], p.x * t[1] + p.y * t[3] + t[5])
    }

    /// Axis-aligned bounds of `rect` after transformation.
    pub fn apply_rect_bounds(&self, rect: Rect) -> Rect {
        let corners = rect.normalized().corners().map(|c| self.apply(c));
        Rect::bounding(corners).unwrap_or(rect)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn premultiply_applies_new_operation_first() {
        // translate(10, 0) then scale(2, 2): points are scaled, then moved.
        let mut m = Transform2D::identity();
        m.premultiply(&Transform2D::translation(10.0, 0.0));
        m.premultiply(&Transform2D::scaling(2.0, 2.0));

        assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let p = Transform2D::rotation(FRAC_PI_2).apply(Vec2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rect_bounds_under_rotation() {
        let b = Transform2D::rotation(FRAC_PI_2).apply_rect_bounds(Rect::new(0.0, 0.0, 4.0, 2.0));
        assert_relative_eq!(b.origin.x, -2.0, epsilon = 1e-5);
        assert_relative_eq!(b.origin.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.size.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(b.size.y, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn identity_leaves_rect_alone() {
        let r = Rect::new(3.0, 4.0, 5.0, 6.0);
        assert_eq!(Transform2D::default().apply_rect_bounds(r), r);
    }
}
