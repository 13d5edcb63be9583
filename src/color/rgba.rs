//! Floating-point RGBA color and its arithmetic.
//!
//! Arithmetic only touches the red, green and blue channels. Alpha is
//! carried over from the color operand unchanged, so `(a + b).a == a.a`.
//! Every operator delegates to [`Color::map_rgb`] or [`Color::zip_rgb`],
//! which are the only places channels are combined.

use std::fmt;
use std::io::{self, Write};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::convert::{self, ColorInt};
use super::ColorHsv;
use crate::error::{Error, Result};
use crate::scalar::{self, Scalar};

const COMPONENT: &str = "color";

/// RGBA color with floating-point components.
///
/// Channels are meant to lie in `[0, 1]` but nothing enforces that until
/// [`Color::limit`] is called; intermediate arithmetic may leave the range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component (0.0-1.0).
    pub r: Scalar,
    /// Green component (0.0-1.0).
    pub g: Scalar,
    /// Blue component (0.0-1.0).
    pub b: Scalar,
    /// Alpha component (0.0-1.0, 1.0 = fully opaque).
    pub a: Scalar,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: Scalar) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [Scalar; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Create from a slice of three (opaque) or four channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] for any other length.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        match *values {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(Error::ComponentCount {
                kind: "Color",
                expected: "3 or 4",
                found: values.len(),
            }),
        }
    }

    /// Unpack a [`ColorInt`].
    #[must_use]
    pub fn from_int(packed: ColorInt) -> Self {
        convert::rgba_from_int(packed)
    }

    /// Pack into a [`ColorInt`].
    #[must_use]
    pub fn as_int(self) -> ColorInt {
        convert::int_from_rgba(self)
    }

    /// All four channels scaled to bytes, truncated toward zero.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            convert::channel_to_byte(self.r),
            convert::channel_to_byte(self.g),
            convert::channel_to_byte(self.b),
            convert::channel_to_byte(self.a),
        ]
    }

    /// Red, green and blue scaled to bytes, truncated toward zero.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    /// `#RRGGBBAA` rendering, for diagnostics only.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Write the `#RRGGBBAA` rendering followed by a newline to stdout.
    pub fn print(&self) {
        let _ = self.write_to(&mut io::stdout().lock());
    }

    /// Write the `#RRGGBBAA` rendering followed by a newline to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Convert to HSV.
    #[must_use]
    pub fn to_hsv(self) -> ColorHsv {
        convert::hsv_from_rgba(self)
    }

    /// Clamp every channel, alpha included, into `[0, 1]`.
    pub fn limit(&mut self) {
        *self = self.limited();
    }

    /// Copy with every channel, alpha included, clamped into `[0, 1]`.
    #[must_use]
    pub fn limited(self) -> Self {
        Self::new(
            scalar::clamp(self.r, 0.0, 1.0),
            scalar::clamp(self.g, 0.0, 1.0),
            scalar::clamp(self.b, 0.0, 1.0),
            scalar::clamp(self.a, 0.0, 1.0),
        )
    }

    /// Apply `f` to red, green and blue. Alpha is kept.
    #[must_use]
    pub fn map_rgb(self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Combine red, green and blue pairwise with `f`. Alpha comes from `self`.
    #[must_use]
    pub fn zip_rgb(self, other: Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b), self.a)
    }

    /// Channel-wise sum.
    #[must_use]
    pub fn add_rgb(self, other: Self) -> Self {
        self.zip_rgb(other, |a, b| a + b)
    }

    /// Channel-wise difference.
    #[must_use]
    pub fn sub_rgb(self, other: Self) -> Self {
        self.zip_rgb(other, |a, b| a - b)
    }

    /// Channel-wise product.
    #[must_use]
    pub fn modulate(self, other: Self) -> Self {
        self.zip_rgb(other, |a, b| a * b)
    }

    /// Channel-wise quotient; a zero channel in `other` divides by 1.
    #[must_use]
    pub fn div_rgb(self, other: Self) -> Self {
        self.zip_rgb(other, |a, b| a / nonzero_divisor(b))
    }

    /// Add `delta` to red, green and blue.
    #[must_use]
    pub fn add_scalar(self, delta: Scalar) -> Self {
        self.map_rgb(|c| c + delta)
    }

    /// Subtract `delta` from red, green and blue.
    #[must_use]
    pub fn sub_scalar(self, delta: Scalar) -> Self {
        self.map_rgb(|c| c - delta)
    }

    /// Multiply red, green and blue by `factor`.
    #[must_use]
    pub fn scale(self, factor: Scalar) -> Self {
        self.map_rgb(|c| c * factor)
    }

    /// Divide red, green and blue by `divisor`, or by 1 if it is zero.
    #[must_use]
    pub fn divide_or_default(self, divisor: Scalar) -> Self {
        let divisor = nonzero_divisor(divisor);
        self.map_rgb(|c| c / divisor)
    }

    fn adjust_hsv(&mut self, f: impl FnOnce(&mut ColorHsv)) {
        let mut hsv = convert::hsv_from_rgba(*self);
        f(&mut hsv);
        *self = convert::rgba_from_hsv(hsv);
    }

    /// Replace the hue with `degrees`, keeping saturation and value.
    pub fn set_hue(&mut self, degrees: u32) {
        self.adjust_hsv(|hsv| hsv.set_hue(degrees));
    }

    /// Replace the saturation with a whole percent.
    pub fn set_saturation(&mut self, percent: u32) {
        self.adjust_hsv(|hsv| hsv.set_saturation(percent));
    }

    /// Replace the value with a whole percent.
    pub fn set_value(&mut self, percent: u32) {
        self.adjust_hsv(|hsv| hsv.set_value(percent));
    }

    /// Shift saturation by `delta`, clamped to `[0, 1]`.
    pub fn saturate(&mut self, delta: Scalar) {
        self.adjust_hsv(|hsv| hsv.saturate(delta));
    }

    /// Shift value by `delta`, clamped to `[0, 1]`.
    pub fn lighten(&mut self, delta: Scalar) {
        self.adjust_hsv(|hsv| hsv.lighten(delta));
    }
}

fn nonzero_divisor(divisor: Scalar) -> Scalar {
    if scalar::is_zero(divisor) {
        crate::trace!(COMPONENT, "zero divisor {divisor} replaced with 1");
        1.0
    } else {
        divisor
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

impl From<ColorInt> for Color {
    fn from(packed: ColorInt) -> Self {
        convert::rgba_from_int(packed)
    }
}

impl From<Color> for ColorInt {
    fn from(color: Color) -> Self {
        convert::int_from_rgba(color)
    }
}

impl From<ColorHsv> for Color {
    fn from(hsv: ColorHsv) -> Self {
        convert::rgba_from_hsv(hsv)
    }
}

// Scalar-on-the-left forms mirror the color-on-the-left form, so
// `s - c == c - s` and `s / c == c / s`.
macro_rules! impl_rgb_ops {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $with_color:ident, $with_scalar:ident) => {
        impl $Op for Color {
            type Output = Color;

            fn $op(self, rhs: Color) -> Color {
                self.$with_color(rhs)
            }
        }

        impl $Op<Scalar> for Color {
            type Output = Color;

            fn $op(self, rhs: Scalar) -> Color {
                self.$with_scalar(rhs)
            }
        }

        impl $Op<Color> for Scalar {
            type Output = Color;

            fn $op(self, rhs: Color) -> Color {
                rhs.$with_scalar(self)
            }
        }

        impl $OpAssign for Color {
            fn $op_assign(&mut self, rhs: Color) {
                *self = self.$with_color(rhs);
            }
        }

        impl $OpAssign<Scalar> for Color {
            fn $op_assign(&mut self, rhs: Scalar) {
                *self = self.$with_scalar(rhs);
            }
        }
    };
}

impl_rgb_ops!(Add, add, AddAssign, add_assign, add_rgb, add_scalar);
impl_rgb_ops!(Sub, sub, SubAssign, sub_assign, sub_rgb, sub_scalar);
impl_rgb_ops!(Mul, mul, MulAssign, mul_assign, modulate, scale);
impl_rgb_ops!(Div, div, DivAssign, div_assign, div_rgb, divide_or_default);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(actual: Color, expected: Color) {
        assert_abs_diff_eq!(actual.r, expected.r, epsilon = 1e-5);
        assert_abs_diff_eq!(actual.g, expected.g, epsilon = 1e-5);
        assert_abs_diff_eq!(actual.b, expected.b, epsilon = 1e-5);
        assert_abs_diff_eq!(actual.a, expected.a, epsilon = 1e-5);
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::BLACK, Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.25);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn test_array_conversions() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color::from_array(c.to_array()), c);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Color::from_slice(&[0.1, 0.2, 0.3]).unwrap(), Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(
            Color::from_slice(&[0.1, 0.2, 0.3, 0.4]).unwrap(),
            Color::new(0.1, 0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Color::from_slice(&[0.1, 0.2]).unwrap_err();
        assert_eq!(
            err,
            Error::ComponentCount { kind: "Color", expected: "3 or 4", found: 2 }
        );
        assert!(Color::from_slice(&[0.0; 5]).is_err());
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Color::WHITE.as_int(), 0xFFFF_FFFF);
        assert_eq!(Color::BLACK.as_int(), 0x0000_00FF);
        let packed: ColorInt = Color::rgb(1.0, 0.0, 0.0).into();
        assert_eq!(packed, 0xFF00_00FF);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Color::from_int(0xFFFF_FFFF), Color::WHITE);
        assert_eq!(Color::from(0x0000_00FF), Color::BLACK);
    }

    #[test]
    fn test_to_rgba8_truncates() {
        let c = Color::new(0.5, 0.999, 0.0, 1.0);
        assert_eq!(c.to_rgba8(), [127, 254, 0, 255]);
        assert_eq!(c.to_rgb8(), [127, 254, 0]);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_string(), "#FF0000FF");
        assert_eq!(Color::BLACK.to_hex(), "#000000FF");
        assert_eq!(Color::new(0.0, 0.05, 0.0, 0.0).to_hex(), "#000C0000");
    }

    #[test]
    fn test_write_to_ignores_debug_switch() {
        let _lock = crate::debug::tests::lock_switch();
        crate::debug::disable();
        let mut out = Vec::new();
        Color::new(1.0, 0.0, 0.0, 1.0).write_to(&mut out).unwrap();
        assert_eq!(out, b"#FF0000FF\n");

        crate::debug::enable();
        let mut out = Vec::new();
        Color::WHITE.write_to(&mut out).unwrap();
        crate::debug::disable();
        assert_eq!(String::from_utf8(out).unwrap(), "#FFFFFFFF\n");
    }

    #[test]
    fn test_limit() {
        let mut c = Color::new(-0.5, 0.5, 1.5, 2.0);
        c.limit();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_limited_leaves_original() {
        let c = Color::new(-1.0, 2.0, 0.5, -1.0);
        assert_eq!(c.limited(), Color::new(0.0, 1.0, 0.5, 0.0));
        assert_eq!(c.r, -1.0);
    }

    #[test]
    fn test_add_keeps_left_alpha() {
        let a = Color::new(0.1, 0.2, 0.3, 0.5);
        let b = Color::new(0.1, 0.1, 0.1, 0.9);
        let sum = a + b;
        assert_rgb_eq(sum, Color::new(0.2, 0.3, 0.4, 0.5));
    }

    #[test]
    fn test_scalar_ops_keep_alpha() {
        let c = Color::new(0.2, 0.4, 0.6, 0.3);
        assert_rgb_eq(c + 0.1, Color::new(0.3, 0.5, 0.7, 0.3));
        assert_rgb_eq(c - 0.1, Color::new(0.1, 0.3, 0.5, 0.3));
        assert_rgb_eq(c * 2.0, Color::new(0.4, 0.8, 1.2, 0.3));
        assert_rgb_eq(c / 2.0, Color::new(0.1, 0.2, 0.3, 0.3));
    }

    #[test]
    fn test_scalar_on_left_mirrors() {
        let c = Color::new(0.2, 0.4, 0.6, 0.3);
        assert_eq!(0.1 + c, c + 0.1);
        assert_eq!(0.1 - c, c - 0.1);
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!(2.0 / c, c / 2.0);
    }

    #[test]
    fn test_color_ops() {
        let a = Color::new(0.5, 0.5, 0.5, 1.0);
        let b = Color::new(0.25, 0.5, 1.0, 0.0);
        assert_rgb_eq(a - b, Color::new(0.25, 0.0, -0.5, 1.0));
        assert_rgb_eq(a * b, Color::new(0.125, 0.25, 0.5, 1.0));
        assert_rgb_eq(a / b, Color::new(2.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_compound_ops() {
        let mut c = Color::new(0.5, 0.5, 0.5, 0.7);
        c += 0.25;
        c -= Color::new(0.25, 0.0, 0.0, 0.0);
        c *= 2.0;
        c /= Color::new(2.0, 1.0, 1.0, 1.0);
        assert_rgb_eq(c, Color::new(0.5, 1.5, 1.5, 0.7));
    }

    #[test]
    fn test_divide_by_zero_scalar_uses_one() {
        let c = Color::new(0.2, 0.4, 0.6, 0.8);
        assert_eq!(c / 0.0, c / 1.0);
        assert_eq!(c / 0.0, c);

        let mut d = c;
        d /= 0.0;
        assert_eq!(d, c);
    }

    #[test]
    fn test_divide_by_zero_channel_uses_one() {
        let c = Color::new(0.2, 0.4, 0.6, 0.8);
        let q = c / Color::new(0.0, 2.0, 0.0, 0.0);
        assert_rgb_eq(q, Color::new(0.2, 0.2, 0.6, 0.8));
    }

    #[test]
    fn test_map_and_zip_keep_alpha() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.map_rgb(|_| 9.0), Color::new(9.0, 9.0, 9.0, 0.4));
        assert_eq!(c.zip_rgb(Color::WHITE, |_, b| b), Color::new(1.0, 1.0, 1.0, 0.4));
    }

    #[test]
    fn test_set_hue_moves_red_to_blue() {
        let mut c = Color::rgb(1.0, 0.0, 0.0);
        c.set_hue(240);
        assert_rgb_eq(c, Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_set_saturation_to_zero_grays_out() {
        let mut c = Color::rgb(0.0, 0.8, 0.0);
        c.set_saturation(0);
        assert_rgb_eq(c, Color::rgb(0.8, 0.8, 0.8));
    }

    #[test]
    fn test_set_value() {
        let mut c = Color::rgb(0.0, 0.0, 1.0);
        c.set_value(50);
        assert_rgb_eq(c, Color::rgb(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_saturate_and_lighten_clamp() {
        let mut c = Color::rgb(0.5, 0.25, 0.25);
        c.saturate(1.0);
        assert_rgb_eq(c, Color::rgb(0.5, 0.0, 0.0));

        c.lighten(10.0);
        assert_rgb_eq(c, Color::rgb(1.0, 0.0, 0.0));

        c.lighten(-10.0);
        assert_rgb_eq(c, Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_mutators_keep_alpha() {
        let mut c = Color::new(1.0, 0.0, 0.0, 0.4);
        c.set_hue(120);
        assert_abs_diff_eq!(c.a, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_from_hsv() {
        let c = Color::from(ColorHsv::from_ints(0, 100, 100, 50));
        assert_rgb_eq(c, Color::new(1.0, 0.0, 0.0, 0.5));
    }
}
