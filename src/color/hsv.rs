//! HSV(A) color representation.

use super::convert::{self, UNITS_PER_DEGREE, UNITS_PER_PERCENT};
use super::Color;
use crate::scalar::{self, Scalar};

/// HSVA color with floating-point components.
///
/// Fields are public and never normalized: a hue written directly may fall
/// outside `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorHsv {
    /// Hue (0.0-360.0 degrees).
    pub h: Scalar,
    /// Saturation (0.0-1.0).
    pub s: Scalar,
    /// Value (0.0-1.0).
    pub v: Scalar,
    /// Alpha (0.0-1.0).
    pub a: Scalar,
}

impl ColorHsv {
    /// Create a new HSVA color.
    #[must_use]
    pub const fn new(h: Scalar, s: Scalar, v: Scalar, a: Scalar) -> Self {
        Self { h, s, v, a }
    }

    /// Create from whole-number inputs: hue in degrees, the rest in percent.
    ///
    /// ```
    /// use trueno_color::color::ColorHsv;
    ///
    /// let hsv = ColorHsv::from_ints(120, 100, 50, 100);
    /// assert_eq!(hsv.h, 120.0);
    /// assert_eq!(hsv.v, 0.5);
    /// ```
    #[must_use]
    pub fn from_ints(h: u32, s: u32, v: u32, a: u32) -> Self {
        Self::new(
            h as Scalar,
            s as Scalar * UNITS_PER_PERCENT,
            v as Scalar * UNITS_PER_PERCENT,
            a as Scalar * UNITS_PER_PERCENT,
        )
    }

    /// Like [`ColorHsv::from_ints`] with alpha at 100%.
    #[must_use]
    pub fn hsv(h: u32, s: u32, v: u32) -> Self {
        Self::from_ints(h, s, v, 100)
    }

    /// Set the hue in degrees, stored as given.
    pub fn set_hue(&mut self, degrees: u32) {
        self.h = degrees as Scalar;
    }

    /// Set the saturation from a whole percent.
    pub fn set_saturation(&mut self, percent: u32) {
        self.s = percent as Scalar * UNITS_PER_PERCENT;
    }

    /// Set the value from a whole percent.
    pub fn set_value(&mut self, percent: u32) {
        self.v = percent as Scalar * UNITS_PER_PERCENT;
    }

    /// Add `delta` to the saturation, clamped to `[0, 1]`.
    pub fn saturate(&mut self, delta: Scalar) {
        self.s = scalar::clamp(self.s + delta, 0.0, 1.0);
    }

    /// Add `delta` to the value, clamped to `[0, 1]`.
    pub fn lighten(&mut self, delta: Scalar) {
        self.v = scalar::clamp(self.v + delta, 0.0, 1.0);
    }

    /// Inverse of [`ColorHsv::from_ints`]: `[hue, s%, v%, a%]`, truncated.
    #[must_use]
    pub fn to_ints(self) -> [u32; 4] {
        [
            self.h as u32,
            (self.s * 100.0) as u32,
            (self.v * 100.0) as u32,
            (self.a * 100.0) as u32,
        ]
    }

    /// Hue as a fraction of a full turn.
    #[must_use]
    pub fn hue_turns(self) -> Scalar {
        self.h * UNITS_PER_DEGREE
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Color {
        convert::rgba_from_hsv(self)
    }
}

impl From<Color> for ColorHsv {
    fn from(color: Color) -> Self {
        convert::hsv_from_rgba(color)
    }
}
