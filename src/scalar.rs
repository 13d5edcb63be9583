//! Scalar helpers shared by the color and geometry types.

/// Floating-point type used for every channel and coordinate.
pub type Scalar = f32;

/// Tolerance used by [`eq`] and [`is_zero`].
pub const EPSILON: Scalar = f32::EPSILON;

/// Degrees in one radian.
pub const DEGREES_PER_RADIAN: Scalar = 180.0 / std::f32::consts::PI;

/// Approximate equality within [`EPSILON`].
#[inline]
#[must_use]
pub fn eq(a: Scalar, b: Scalar) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `v` is within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn is_zero(v: Scalar) -> bool {
    v.abs() < EPSILON
}

/// Clamp `v` into `[lo, hi]`.
///
/// Unlike [`f32::clamp`] this never panics when `lo > hi`; the upper bound
/// wins in that case. NaN passes through unchanged.
#[inline]
#[must_use]
pub fn clamp(v: Scalar, lo: Scalar, hi: Scalar) -> Scalar {
    let v = if v < lo { lo } else { v };
    if v > hi {
        hi
    } else {
        v
    }
}

/// Largest of three values.
#[inline]
#[must_use]
pub fn max3(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    a.max(b).max(c)
}

/// Smallest of three values.
#[inline]
#[must_use]
pub fn min3(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    a.min(b).min(c)
}
