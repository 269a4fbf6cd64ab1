// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle, as produced by curvature queries.

use core::ops::{Add, Sub};

use crate::{Point, Vec2};

/// A circle.
///
/// Circles built from curvature may have an infinite radius and a
/// non-finite center; check [`Circle::is_finite`] before using them.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, Point, Vec2};

    #[test]
    fn circle_basics() {
        let c = Circle::new((1.0, 1.0), 2.0);
        assert_eq!(c.radius, 2.0);
        assert_eq!((c + Vec2::new(1.0, 0.0)).center, Point::new(2.0, 1.0));
        assert!(c.is_finite());
        assert!(!Circle::new((0.0, 0.0), f64::INFINITY).is_finite());
        assert!(Circle::new((f64::NAN, 0.0), 1.0).is_nan());
    }
}
