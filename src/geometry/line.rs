//! Point-slope line.

use super::Vector2;
use crate::scalar::{self, Scalar};

/// A non-vertical line `y = m * (x - x1) + y1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Slope.
    pub m: Scalar,
    /// X coordinate of the anchor point.
    pub x1: Scalar,
    /// Y coordinate of the anchor point.
    pub y1: Scalar,
}

impl Line {
    /// Create a line from a slope and an anchor point.
    #[must_use]
    pub const fn new(m: Scalar, x1: Scalar, y1: Scalar) -> Self {
        Self { m, x1, y1 }
    }

    /// Line through two points, anchored at `p0`.
    ///
    /// Returns `None` when the points share an x coordinate, since a
    /// vertical line has no slope.
    ///
    /// ```
    /// use trueno_color::geometry::{Line, Vector2};
    ///
    /// let line = Line::through(Vector2::new(0.0, 1.0), Vector2::new(2.0, 5.0)).unwrap();
    /// assert_eq!(line.eval(1.0), 3.0);
    /// assert!(Line::through(Vector2::UNIT, Vector2::new(1.0, 4.0)).is_none());
    /// ```
    #[must_use]
    pub fn through(p0: Vector2, p1: Vector2) -> Option<Self> {
        let dx = p1.x - p0.x;
        if scalar::is_zero(dx) {
            return None;
        }
        Some(Self::new((p1.y - p0.y) / dx, p0.x, p0.y))
    }

    /// Y value at `x`.
    #[must_use]
    pub fn eval(&self, x: Scalar) -> Scalar {
        self.m * (x - self.x1) + self.y1
    }

    /// Point on the line at `x`.
    #[must_use]
    pub fn point_at(&self, x: Scalar) -> Vector2 {
        Vector2::new(x, self.eval(x))
    }
}
