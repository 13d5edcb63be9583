//! Spatial vector.

use std::ops::Neg;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::scalar::{self, Scalar};

/// A 3D vector with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    /// X coordinate.
    pub x: Scalar,
    /// Y coordinate.
    pub y: Scalar,
    /// Z coordinate.
    pub z: Scalar,
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const UNIT: Self = Self::new(1.0, 1.0, 1.0);
    /// `(1, 0, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Create from a three-element slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] if the slice length is not 3.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(Error::ComponentCount {
                kind: "Vector3",
                expected: "3",
                found: values.len(),
            }),
        }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [Scalar; 3] {
        [self.x, self.y, self.z]
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
        self.x * other.x + self.y * other.y + self.z * other.z
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

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy, or [`Vector3::ZERO`] if the length is zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mag = self.length();
        if mag > 0.0 {
            self / mag
        } else {
            Self::ZERO
        }
    }

    /// Component-wise equality within epsilon.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        scalar::eq(self.x, other.x) && scalar::eq(self.y, other.y) && scalar::eq(self.z, other.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<Color> for Vector3 {
    /// `(r, g, b)`; alpha is dropped.
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl_vector_ops!(Vector3 { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_slice() {
        assert_eq!(Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap(), Vector3::new(1.0, 2.0, 3.0));
        let err = Vector3::from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("Vector3"));
    }

    #[test]
    fn test_from_color_drops_alpha() {
        let v = Vector3::from(Color::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(v, Vector3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_cross_of_axes() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_X), -Vector3::UNIT_Z);
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_length() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.length(), 7.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.distance(Vector3::ZERO), 7.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.distance2(Vector3::ZERO), 49.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(0.0, 0.0, 5.0);
        v.normalize();
        assert!(v.approx_eq(Vector3::UNIT_Z));
        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vector3::UNIT;
        v += Vector3::new(1.0, 2.0, 3.0);
        v *= Vector3::new(2.0, 1.0, 0.5);
        v -= 1.0;
        v /= 3.0;
        assert!(v.approx_eq(Vector3::new(1.0, 2.0 / 3.0, 1.0 / 3.0)));
    }
}
