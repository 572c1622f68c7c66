// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer and floating point geometry, and the pixel color convention.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A pixel color.
///
/// `true` is ink (black), `false` is paper (white). Every primitive and the display
/// transfer layer rely on this polarity.
pub type Color = bool;

/// Ink.
pub const BLACK: Color = true;
/// Paper.
pub const WHITE: Color = false;

/// An integer point in pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x coordinate of the point.
    pub x: i16,
    /// The y coordinate of the point.
    pub y: i16,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point.
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl core::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl From<(i16, i16)> for Point {
    fn from((x, y): (i16, i16)) -> Self {
        Self::new(x, y)
    }
}

/// A floating point point, used by bezier curves and animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    /// The x coordinate of the point.
    pub x: f32,
    /// The y coordinate of the point.
    pub y: f32,
}

impl PointF {
    /// The point `(0, 0)`.
    pub const ZERO: Self = Self::new(0., 0.);

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel, halfway cases away from zero.
    ///
    /// Coordinates outside the `i16` range saturate.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating float to int conversion is the intended behavior"
    )]
    pub fn to_point(self) -> Point {
        Point::new(self.x.round() as i16, self.y.round() as i16)
    }

    /// The euclidean length of the vector from the origin to this point.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// The unit vector in the same direction, or zero for (near) zero-length vectors.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len < 1e-4 {
            return Self::ZERO;
        }

        Self::new(self.x / len, self.y / len)
    }

    /// Whether either coordinate is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f32::from(p.x), f32::from(p.y))
    }
}

impl From<(f32, f32)> for PointF {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl core::ops::Add for PointF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for PointF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f32> for PointF {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle. The right and bottom edges are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The left edge.
    pub x: i16,
    /// The top edge.
    pub y: i16,
    /// The width.
    pub w: i16,
    /// The height.
    pub h: i16,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self { x, y, w, h }
    }

    /// The left edge (inclusive).
    pub const fn left(&self) -> i16 {
        self.x
    }

    /// The top edge (inclusive).
    pub const fn top(&self) -> i16 {
        self.y
    }

    /// The right edge, `x + w` (exclusive).
    pub const fn right(&self) -> i16 {
        self.x.wrapping_add(self.w)
    }

    /// The bottom edge, `y + h` (exclusive).
    pub const fn bottom(&self) -> i16 {
        self.y.wrapping_add(self.h)
    }

    /// Whether the pixel `(px, py)` lies inside the rectangle.
    pub const fn contains(&self, px: i16, py: i16) -> bool {
        let (px, py) = (px as i32, py as i32);
        let (x, y) = (self.x as i32, self.y as i32);
        px >= x && px < x + self.w as i32 && py >= y && py < y + self.h as i32
    }

    /// Whether the point lies inside the rectangle.
    pub const fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, PointF, Rect};

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(PointF::new(1.5, -1.5).to_point(), Point::new(2, -2));
        assert_eq!(PointF::new(2.49, -2.49).to_point(), Point::new(2, -2));
        assert_eq!(PointF::new(-0.5, 0.5).to_point(), Point::new(-1, 1));
    }

    #[test]
    fn normalized_zero_vector() {
        assert_eq!(PointF::new(0.00001, 0.0).normalized(), PointF::ZERO);
        let n = PointF::new(3.0, 4.0).normalized();
        assert!((n.x - 0.6).abs() < 1e-6 && (n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn rect_edges_are_exclusive() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!((r.right(), r.bottom()), (6, 8));
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
        assert!(r.contains_point(Point::new(4, 4)));
    }
}
