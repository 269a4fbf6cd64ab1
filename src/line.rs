// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines, rays and line segments.

use core::ops::{Add, Sub};

use crate::{Point, Vec2};

/// An infinite line through `origin`, running along `direction`.
///
/// The direction does not need to be normalized, but it must be nonzero for
/// the line to be meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// A point on the line.
    pub origin: Point,
    /// The direction of the line.
    pub direction: Vec2,
}

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// The start of the ray.
    pub origin: Point,
    /// The direction the ray extends in.
    pub direction: Vec2,
}

/// A line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The segment's start point.
    pub start: Point,
    /// The segment's end point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(origin: impl Into<Point>, direction: impl Into<Vec2>) -> Line {
        Line {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// The line through two points, directed from `p0` to `p1`.
    #[inline]
    pub fn through(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        let p0 = p0.into();
        Line::new(p0, p1.into() - p0)
    }

    /// The point at `t` multiples of the direction away from the origin.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Signed distance of a point from the line.
    ///
    /// Positive values are on the left of the direction, in a y-up
    /// coordinate system.
    #[inline]
    pub fn signed_distance(&self, pt: Point) -> f64 {
        self.direction.cross(pt - self.origin) / self.direction.hypot()
    }
}

impl Ray {
    /// Create a new ray.
    #[inline(always)]
    pub fn new(origin: impl Into<Point>, direction: impl Into<Vec2>) -> Ray {
        Ray {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// The point at `t` multiples of the direction away from the origin.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// The infinite line this ray lies on.
    #[inline]
    pub fn to_line(self) -> Line {
        Line::new(self.origin, self.direction)
    }
}

impl Segment {
    /// Create a new line segment.
    #[inline(always)]
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Segment {
        Segment {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// The length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().hypot()
    }

    /// The point at parameter `t`, where 0 is the start and 1 the end.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.start.lerp(self.end, t)
    }

    /// Returns a copy of this segment with the end points swapped.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    /// The infinite line this segment lies on.
    #[inline]
    pub fn to_line(self) -> Line {
        Line::new(self.start, self.direction())
    }
}

impl From<(Point, Point)> for Segment {
    #[inline(always)]
    fn from((start, end): (Point, Point)) -> Self {
        Segment::new(start, end)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, direction): (Point, Vec2)) -> Self {
        Line::new(origin, direction)
    }
}

impl From<Ray> for Line {
    #[inline(always)]
    fn from(ray: Ray) -> Self {
        ray.to_line()
    }
}

impl Add<Vec2> for Segment {
    type Output = Segment;

    #[inline]
    fn add(self, v: Vec2) -> Segment {
        Segment::new(self.start + v, self.end + v)
    }
}

impl Sub<Vec2> for Segment {
    type Output = Segment;

    #[inline]
    fn sub(self, v: Vec2) -> Segment {
        Segment::new(self.start - v, self.end - v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, Point, Ray, Segment, Vec2};

    #[test]
    fn line_eval() {
        let line = Line::through((1.0, 1.0), (3.0, 2.0));
        assert_eq!(line.direction, Vec2::new(2.0, 1.0));
        assert_eq!(line.eval(0.5), Point::new(2.0, 1.5));
        let horizontal = Line::new((0.0, 0.5), (2.0, 0.0));
        assert_eq!(horizontal.signed_distance(Point::new(7.0, 1.5)), 1.0);
        assert_eq!(horizontal.signed_distance(Point::new(-7.0, 0.0)), -0.5);
    }

    #[test]
    fn ray_to_line() {
        let ray = Ray::new((0.0, 0.0), (0.0, 2.0));
        assert_eq!(ray.eval(1.5), Point::new(0.0, 3.0));
        assert_eq!(Line::from(ray), Line::new((0.0, 0.0), (0.0, 2.0)));
    }

    #[test]
    fn segment_basics() {
        let seg = Segment::new((0.0, 0.0), (3.0, 4.0));
        assert_eq!(seg.length(), 5.0);
        assert_eq!(seg.eval(1.0), Point::new(3.0, 4.0));
        assert_eq!(seg.reversed().start, Point::new(3.0, 4.0));
        assert_eq!(seg.to_line().direction, Vec2::new(3.0, 4.0));
        let moved = seg + Vec2::new(1.0, 1.0);
        assert_eq!(moved.start, Point::new(1.0, 1.0));
        assert_eq!(moved - Vec2::new(1.0, 1.0), seg);
    }
}
