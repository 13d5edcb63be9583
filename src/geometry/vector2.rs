//! Planar vector.

use std::ops::Neg;

use crate::error::{Error, Result};
use crate::scalar::{self, Scalar};

/// A 2D vector with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// X coordinate.
    pub x: Scalar,
    /// Y coordinate.
    pub y: Scalar,
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const UNIT: Self = Self::new(1.0, 1.0);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Create from a two-element slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] if the slice length is not 2.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(Error::ComponentCount {
                kind: "Vector2",
                expected: "2",
                found: values.len(),
            }),
        }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [Scalar; 2] {
        [self.x, self.y]
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> Scalar {
        self.length2().sqrt()
    }

    /// Squared length.
    #[must_use]
    pub fn length2(self) -> Scalar {
        self.dot(self)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> Scalar {
        (self - other).length()
    }

    /// Squared distance to another point.
    #[must_use]
    pub fn distance2(self, other: Self) -> Scalar {
        (self - other).length2()
    }

    /// Rotated a quarter turn counter-clockwise: `(-y, x)`.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Both components within epsilon of zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        scalar::is_zero(self.x) && scalar::is_zero(self.y)
    }

    /// Scale to unit length. A zero-length vector is left unchanged.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy, or the vector itself if its length is zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if scalar::is_zero(len) {
            self
        } else {
            self / len
        }
    }

    /// Component-wise equality within epsilon.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        scalar::eq(self.x, other.x) && scalar::eq(self.y, other.y)
    }

    /// Both components strictly less than `other`'s.
    #[must_use]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// Both components strictly greater than `other`'s.
    #[must_use]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// Both components less than or equal to `other`'s.
    #[must_use]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Both components greater than or equal to `other`'s.
    #[must_use]
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// Inside the closed box `[x1, x2] x [y1, y2]`.
    #[must_use]
    pub fn contains(self, x1: Scalar, y1: Scalar, x2: Scalar, y2: Scalar) -> bool {
        self.x >= x1 && self.x <= x2 && self.y >= y1 && self.y <= y2
    }

    /// Clamp `x` into `[min, max]`.
    pub fn constrain_x(&mut self, min: Scalar, max: Scalar) {
        self.x = scalar::clamp(self.x, min, max);
    }

    /// Clamp `y` into `[min, max]`.
    pub fn constrain_y(&mut self, min: Scalar, max: Scalar) {
        self.y = scalar::clamp(self.y, min, max);
    }

    /// Clamp into the box `[x1, x2] x [y1, y2]`.
    pub fn constrain(&mut self, x1: Scalar, y1: Scalar, x2: Scalar, y2: Scalar) {
        self.constrain_x(x1, x2);
        self.constrain_y(y1, y2);
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl_vector_ops!(Vector2 { x, y });
