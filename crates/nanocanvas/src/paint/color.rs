use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Straight-alpha RGBA color with 8 bits per channel.
///
/// Packed form (see [`code`](Self::code)) is `0xRRGGBBAA`: red in the high
/// byte, alpha in the low byte. Equality, ordering and hashing are defined
/// over that packed value.
///
/// Invariant:
/// - every constructor and operator clamps channels to `[0, 255]`; nothing
///   wraps.
#[derive(Debug, Copy, Clone, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
fn unit_to_channel(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    (v * 255.0).clamp(0.0, 255.0) as u8
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Transparent black.
    #[inline]
    pub const fn new() -> Self {
        Self::TRANSPARENT
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a `0xRRGGBBAA` code.
    #[inline]
    pub const fn from_code(code: u32) -> Self {
        let [r, g, b, a] = code.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Signed integer channels, clamped to `[0, 255]`.
    #[inline]
    pub fn from_ints(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::rgba(clamp_channel(r), clamp_channel(g), clamp_channel(b), clamp_channel(a))
    }

    /// Unsigned integer channels, clamped to `255`.
    #[inline]
    pub fn from_u32s(r: u32, g: u32, b: u32, a: u32) -> Self {
        let c = |v: u32| v.min(255) as u8;
        Self::rgba(c(r), c(g), c(b), c(a))
    }

    /// Normalized channels in `[0, 1]`, scaled by 255 and clamped.
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::rgba(
            unit_to_channel(r),
            unit_to_channel(g),
            unit_to_channel(b),
            unit_to_channel(a),
        )
    }

    /// Packs the color as `0xRRGGBBAA`. Inverse of [`from_code`](Self::from_code).
    #[inline]
    pub const fn code(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn red(self) -> f32 {
        self.r as f32 / 255.0
    }

    #[inline]
    pub fn green(self) -> f32 {
        self.g as f32 / 255.0
    }

    #[inline]
    pub fn blue(self) -> f32 {
        self.b as f32 / 255.0
    }

    #[inline]
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl PartialEq for Color {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Color {}

impl Ord for Color {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(&other.code())
    }
}

impl PartialOrd for Color {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl Index<usize> for Color {
    type Output = u8;

    /// Channel by position: 0 = red, 1 = green, 2 = blue, 3 = alpha.
    fn index(&self, index: usize) -> &u8 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color channel index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color channel index out of range: {index}"),
        }
    }
}

/// Lowercase `#rrggbbaa`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.code())
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

impl AddAssign for Color {
    /// Saturating per-channel add, alpha included.
    fn add_assign(&mut self, rhs: Color) {
        self.r = self.r.saturating_add(rhs.r);
        self.g = self.g.saturating_add(rhs.g);
        self.b = self.b.saturating_add(rhs.b);
        self.a = self.a.saturating_add(rhs.a);
    }
}

impl SubAssign for Color {
    /// Saturating per-channel subtract, alpha included.
    fn sub_assign(&mut self, rhs: Color) {
        self.r = self.r.saturating_sub(rhs.r);
        self.g = self.g.saturating_sub(rhs.g);
        self.b = self.b.saturating_sub(rhs.b);
        self.a = self.a.saturating_sub(rhs.a);
    }
}

impl MulAssign for Color {
    /// Alpha-weighted additive blend of `rhs` onto `self`.
    ///
    /// Each color channel becomes `clamp(self.c + rhs.c * rhs.a / 255)` with
    /// integer division; alpha is left unchanged. This is not a component-wise
    /// product.
    fn mul_assign(&mut self, rhs: Color) {
        let weight = rhs.a as i32;
        let blend = |dst: u8, src: u8| clamp_channel(dst as i32 + src as i32 * weight / 255);
        self.r = blend(self.r, rhs.r);
        self.g = blend(self.g, rhs.g);
        self.b = blend(self.b, rhs.b);
    }
}

impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(mut self, rhs: Color) -> Color {
        self += rhs;
        self
    }
}

impl Sub for Color {
    type Output = Color;
    #[inline]
    fn sub(mut self, rhs: Color) -> Color {
        self -= rhs;
        self
    }
}

impl Mul for Color {
    type Output = Color;
    #[inline]
    fn mul(mut self, rhs: Color) -> Color {
        self *= rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn code_round_trips() {
        for code in [0u32, 1, 0xff, 0x0100, 0x12345678, 0x80808080, 0xdeadbeef, u32::MAX] {
            assert_eq!(Color::from_code(code).code(), code);
            assert_eq!(Color::from_code(Color::from_code(code).code()), Color::from_code(code));
        }
    }

    #[test]
    fn packed_layout_is_red_high_alpha_low() {
        let c = Color::from_code(0x11223344);
        assert_eq!(c.channels(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(c[0], 0x11);
        assert_eq!(c[3], 0x44);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::RED.code(), 0xff0000ff);
        assert_eq!(Color::GREEN.code(), 0x00ff00ff);
        assert_eq!(Color::BLUE.code(), 0x0000ffff);
        assert_eq!(Color::WHITE.code(), 0xffffffff);
        assert_eq!(Color::BLACK.code(), 0x000000ff);
        assert_eq!(Color::new(), Color::TRANSPARENT);
        assert_eq!(Color::default().code(), 0);
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn int_constructors_clamp() {
        assert_eq!(Color::from_ints(-5, 300, 128, 255), Color::rgba(0, 255, 128, 255));
        assert_eq!(Color::from_u32s(1000, 0, 7, 256), Color::rgba(255, 0, 7, 255));
    }

    #[test]
    fn float_constructor_scales_and_clamps() {
        assert_eq!(Color::from_f32(1.0, 0.0, 0.5, 2.0), Color::rgba(255, 0, 127, 255));
        assert_eq!(Color::from_f32(-1.0, f32::NAN, 0.0, 1.0), Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn normalized_accessors() {
        let c = Color::rgba(255, 0, 51, 102);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.2);
        assert_eq!(c.alpha(), 0.4);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_saturates() {
        let c = Color::rgba(250, 250, 250, 250) + Color::rgba(10, 10, 10, 10);
        assert_eq!(c, Color::rgba(255, 255, 255, 255));
    }

    #[test]
    fn sub_saturates() {
        let c = Color::rgba(5, 100, 0, 20) - Color::rgba(10, 40, 1, 30);
        assert_eq!(c, Color::rgba(0, 60, 0, 0));
    }

    #[test]
    fn mul_is_alpha_weighted_additive_blend() {
        // 100 + 100 * 100 / 255 = 100 + 39 (integer division) = 139
        let c = Color::rgba(100, 100, 100, 200) * Color::rgba(100, 100, 100, 100);
        assert_eq!(c, Color::rgba(139, 139, 139, 200));
    }

    #[test]
    fn mul_blend_clamps() {
        let c = Color::rgba(200, 0, 0, 10) * Color::rgba(255, 255, 0, 255);
        assert_eq!(c, Color::rgba(255, 255, 0, 10));
    }

    #[test]
    fn assign_operators_match_binary_forms() {
        let (a, b) = (Color::rgba(1, 2, 3, 4), Color::rgba(10, 20, 30, 40));
        let mut x = a;
        x += b;
        assert_eq!(x, a + b);
        x -= b;
        assert_eq!(x, a);
        x *= b;
        assert_eq!(x, a * b);
    }

    // ── ordering / formatting ─────────────────────────────────────────────

    #[test]
    fn ordering_follows_packed_code() {
        assert!(Color::rgba(0, 0, 0, 255) < Color::rgba(0, 0, 1, 0));
        assert!(Color::BLUE < Color::GREEN);
        assert!(Color::GREEN < Color::RED);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::RED.to_string(), "#ff0000ff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
