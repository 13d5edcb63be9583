//! Conversions between [`Color`], [`ColorHsv`] and packed [`ColorInt`] values.
//!
//! Every function here is total: degenerate inputs (zero chroma, zero value,
//! hues outside `[0, 360)`) resolve to a fixed fallback instead of failing.
//!
//! # Packed layout
//!
//! A [`ColorInt`] holds one byte per channel, most significant first:
//!
//! ```text
//! bits 31..24  red   * 255
//! bits 23..16  green * 255
//! bits 15..8   blue  * 255
//! bits  7..0   alpha * 255
//! ```
//!
//! The layout is defined on the integer value, not on its in-memory bytes,
//! so it is the same on every platform.

use super::{Color, ColorHsv};
use crate::scalar::{self, Scalar};

/// Packed 32-bit color, `0xRRGGBBAA` by value.
pub type ColorInt = u32;

/// Scale from a whole percent to the unit interval.
pub const UNITS_PER_PERCENT: Scalar = 1.0 / 100.0;

/// Scale from an 8-bit channel to the unit interval.
pub const UNITS_PER_BYTE: Scalar = 1.0 / 255.0;

/// Scale from degrees to turns.
pub const UNITS_PER_DEGREE: Scalar = 1.0 / 360.0;

const DEGREES_PER_SECTOR: Scalar = 60.0;
const DEGREES_PER_TURN: Scalar = 360.0;

const COMPONENT: &str = "color::convert";

/// Scale a unit channel to a byte, truncating toward zero.
///
/// Out-of-range channels saturate at 0 or 255.
#[inline]
pub(crate) fn channel_to_byte(v: Scalar) -> u8 {
    (v * 255.0) as u8
}

#[inline]
fn byte_to_channel(b: u8) -> Scalar {
    Scalar::from(b) * UNITS_PER_BYTE
}

/// Pack a color into a [`ColorInt`].
///
/// Channels are scaled by 255 and truncated; nothing is rounded or
/// range-checked.
#[must_use]
pub fn int_from_rgba(src: Color) -> ColorInt {
    let [r, g, b, a] = src.to_rgba8();
    (ColorInt::from(r) << 24) | (ColorInt::from(g) << 16) | (ColorInt::from(b) << 8) | ColorInt::from(a)
}

/// Unpack a [`ColorInt`] into a color.
#[must_use]
pub fn rgba_from_int(src: ColorInt) -> Color {
    let byte = |shift: u32| byte_to_channel(((src >> shift) & 0xFF) as u8);
    Color::new(byte(24), byte(16), byte(8), byte(0))
}

/// Convert an RGBA color to HSV.
///
/// The hue is rounded up to a whole degree and lies in `[0, 360]`. For an
/// achromatic input (zero chroma) the hue is 0. Alpha is copied unchanged.
#[must_use]
pub fn hsv_from_rgba(src: Color) -> ColorHsv {
    let Color { r, g, b, a } = src;

    let v = scalar::max3(r, g, b);
    let range = v - scalar::min3(r, g, b);

    let mut h = if range <= 0.0 {
        crate::trace!(COMPONENT, "achromatic {src}, hue forced to 0");
        0.0
    } else if scalar::eq(r, v) {
        DEGREES_PER_SECTOR * ((g - b) / range)
    } else if scalar::eq(g, v) {
        DEGREES_PER_SECTOR * (2.0 + (b - r) / range)
    } else {
        DEGREES_PER_SECTOR * (4.0 + (r - g) / range)
    }
    .ceil();

    // Red-dominant colors with b > g land below zero.
    if h < 0.0 {
        h += DEGREES_PER_TURN;
    }

    let s = if v > 0.0 { range / v } else { v };

    ColorHsv::new(h, s, v, a)
}

/// Convert an HSV color to RGBA.
///
/// The hue picks one of six 60° sectors; the first sector whose closed
/// interval contains `h / 60` wins, and anything outside `[0, 5]` uses the
/// last one. All four output channels are clamped to `[0, 1]`.
#[must_use]
pub fn rgba_from_hsv(src: ColorHsv) -> Color {
    let sector = src.h / DEGREES_PER_SECTOR;

    let c = (src.s * src.v).min(1.0);
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = scalar::clamp(src.v - c, 0.0, 1.0);

    let (r, g, b) = if (0.0..=1.0).contains(&sector) {
        (c, x, 0.0)
    } else if (1.0..=2.0).contains(&sector) {
        (x, c, 0.0)
    } else if (2.0..=3.0).contains(&sector) {
        (0.0, c, x)
    } else if (3.0..=4.0).contains(&sector) {
        (0.0, x, c)
    } else if (4.0..=5.0).contains(&sector) {
        (x, 0.0, c)
    } else {
        if !(0.0..6.0).contains(&sector) {
            crate::warn!(COMPONENT, "hue {} outside [0, 360), using last sector", src.h);
        }
        (c, 0.0, x)
    };

    Color::new(r + m, g + m, b + m, src.a).limited()
}
