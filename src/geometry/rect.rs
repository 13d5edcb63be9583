//! Axis-aligned rectangle.

use super::Vector2;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// A rectangle defined by position and size.
///
/// `(x, y)` is the left-top corner with y growing downward. Width and height
/// may be negative until [`Rect::normalize`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: Scalar,
    /// Y coordinate of the top edge.
    pub y: Scalar,
    /// Width of the rectangle.
    pub width: Scalar,
    /// Height of the rectangle.
    pub height: Scalar,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self { x, y, width, height }
    }

    /// Create from `[x, y, width, height]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] if the slice length is not 4.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        match *values {
            [x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(Error::ComponentCount {
                kind: "Rect",
                expected: "4",
                found: values.len(),
            }),
        }
    }

    /// Create a rectangle spanning two corner points.
    #[must_use]
    pub fn from_corners(left_top: Vector2, right_bottom: Vector2) -> Self {
        Self::new(
            left_top.x,
            left_top.y,
            right_bottom.x - left_top.x,
            right_bottom.y - left_top.y,
        )
    }

    /// `(width, height)`.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// `(x, y)`.
    #[must_use]
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Set width and height.
    pub fn set_size(&mut self, size: Vector2) {
        self.width = size.x;
        self.height = size.y;
    }

    /// Move the left-top corner to `position`.
    pub fn set_position(&mut self, position: Vector2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> Scalar {
        self.x
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> Scalar {
        self.x + self.width
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> Scalar {
        self.y
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> Scalar {
        self.y + self.height
    }

    /// Left-top corner.
    #[must_use]
    pub fn left_top(&self) -> Vector2 {
        Vector2::new(self.left(), self.top())
    }

    /// Right-top corner.
    #[must_use]
    pub fn right_top(&self) -> Vector2 {
        Vector2::new(self.right(), self.top())
    }

    /// Left-bottom corner.
    #[must_use]
    pub fn left_bottom(&self) -> Vector2 {
        Vector2::new(self.left(), self.bottom())
    }

    /// Right-bottom corner.
    #[must_use]
    pub fn right_bottom(&self) -> Vector2 {
        Vector2::new(self.right(), self.bottom())
    }

    /// Corners in the order left-top, right-top, left-bottom, right-bottom.
    #[must_use]
    pub fn corners(&self) -> [Vector2; 4] {
        [self.left_top(), self.right_top(), self.left_bottom(), self.right_bottom()]
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// `[left, top, right, bottom]`.
    #[must_use]
    pub fn bounds(&self) -> [Scalar; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }

    /// `[x, y, width, height]`, i.e. the far corner relative to the origin.
    #[must_use]
    pub fn local_bounds(&self) -> [Scalar; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Like [`Rect::bounds`] with the position mirrored into the positive quadrant.
    #[must_use]
    pub fn abs_bounds(&self) -> [Scalar; 4] {
        let x = self.x.abs();
        let y = self.y.abs();
        [x, y, x + self.width, y + self.height]
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> Scalar {
        self.width / self.height
    }

    /// Get the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> Scalar {
        self.width * self.height
    }

    /// Translate by `delta`.
    pub fn offset(&mut self, delta: Vector2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Scale both corners about the origin.
    pub fn scale(&mut self, sx: Scalar, sy: Scalar) {
        let right = self.right() * sx;
        let bottom = self.bottom() * sy;
        self.x *= sx;
        self.y *= sy;
        self.width = right - self.x;
        self.height = bottom - self.y;
    }

    /// Grow outward by `dx` on the left and right and `dy` on top and bottom.
    pub fn expand(&mut self, dx: Scalar, dy: Scalar) {
        self.x -= dx;
        self.y -= dy;
        self.width += 2.0 * dx;
        self.height += 2.0 * dy;
    }

    /// Shrink inward; the inverse of [`Rect::expand`].
    pub fn contract(&mut self, dx: Scalar, dy: Scalar) {
        self.expand(-dx, -dy);
    }

    /// Whether `(px, py)` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, px: Scalar, py: Scalar) -> bool {
        self.contains_x(px) && self.contains_y(py)
    }

    /// Whether `point` lies inside or on the border.
    #[must_use]
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.contains(point.x, point.y)
    }

    /// Whether `px` lies between the left and right edges.
    #[must_use]
    pub fn contains_x(&self, px: Scalar) -> bool {
        px >= self.x && px - self.x <= self.width
    }

    /// Whether `py` lies between the top and bottom edges.
    #[must_use]
    pub fn contains_y(&self, py: Scalar) -> bool {
        py >= self.y && py - self.y <= self.height
    }

    /// Whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.left_top()) && self.contains_point(other.right_bottom())
    }

    /// Whether `self` falls completely outside `other`.
    ///
    /// Rectangles that only share an edge are not clipped.
    #[must_use]
    pub fn clipped(&self, other: &Rect) -> bool {
        self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom()
    }

    /// Reorder the corners so width and height are non-negative.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Copy with the corners reordered so width and height are non-negative.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (x1, x2) = min_max(self.left(), self.right());
        let (y1, y2) = min_max(self.top(), self.bottom());
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        let x1 = a.left().min(b.left());
        let y1 = a.top().min(b.top());
        let x2 = a.right().max(b.right());
        let y2 = a.bottom().max(b.bottom());
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Overlapping region, or `None` if the rectangles are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Self> {
        let a = self.normalized();
        let b = other.normalized();
        if a.clipped(&b) {
            return None;
        }
        let x1 = a.left().max(b.left());
        let y1 = a.top().max(b.top());
        let x2 = a.right().min(b.right());
        let y2 = a.bottom().min(b.bottom());
        Some(Self::new(x1, y1, x2 - x1, y2 - y1))
    }

    /// Shift by the center of `other`, unless `other` has no area.
    ///
    /// Used to place a child rectangle, positioned relative to its own
    /// center, inside a parent.
    pub fn center_on(&mut self, other: &Rect) {
        if other.width != 0.0 && other.height != 0.0 {
            self.offset(other.center());
        }
    }
}

fn min_max(a: Scalar, b: Scalar) -> (Scalar, Scalar) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
