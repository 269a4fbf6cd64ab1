// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cubic Bézier that keeps its power-basis coefficients around.

use crate::{Axis, Cubic, CubicBez, IndexError, Point, Vec2};

/// A cubic Bézier together with its per-axis polynomials.
///
/// Evaluating the polynomials with Horner's method is cheaper than de
/// Casteljau, which helps when one curve is sampled many times. The control
/// points can only be changed through setters, which recompute the
/// polynomials immediately, so the two representations always agree.
///
/// Results agree with [`CubicBez`] up to floating point rounding; unlike
/// [`CubicBez::eval`], the endpoints are not reproduced exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CachedCubicBez {
    curve: CubicBez,
    x: Cubic,
    y: Cubic,
}

impl CachedCubicBez {
    /// Wrap a curve, computing its polynomials.
    pub fn new(curve: CubicBez) -> Self {
        CachedCubicBez {
            curve,
            x: curve.polynomial(Axis::Horizontal),
            y: curve.polynomial(Axis::Vertical),
        }
    }

    /// The underlying curve.
    #[inline]
    pub fn curve(&self) -> CubicBez {
        self.curve
    }

    /// Replace the whole curve.
    pub fn set_curve(&mut self, curve: CubicBez) {
        *self = CachedCubicBez::new(curve);
    }

    /// Move the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if `index` is greater than 3, leaving the
    /// curve unchanged.
    pub fn set_control(&mut self, index: usize, p: Point) -> Result<(), IndexError> {
        let mut curve = self.curve;
        match index {
            0 => curve.p0 = p,
            1 => curve.p1 = p,
            2 => curve.p2 = p,
            3 => curve.p3 = p,
            _ => return Err(IndexError::new(index, 4)),
        }
        self.set_curve(curve);
        Ok(())
    }

    /// The polynomial of one coordinate.
    #[inline]
    pub fn polynomial(&self, axis: Axis) -> Cubic {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// The point at `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        Point::new(self.x.eval(t), self.y.eval(t))
    }

    /// The first derivative at `t`.
    #[inline]
    pub fn deriv(&self, t: f64) -> Vec2 {
        Vec2::new(self.x.deriv().eval(t), self.y.deriv().eval(t))
    }

    /// The second derivative at `t`.
    #[inline]
    pub fn deriv2(&self, t: f64) -> Vec2 {
        fn second(poly: &Cubic, t: f64) -> f64 {
            let [_, _, c2, c3] = poly.coeffs;
            2.0 * c2 + 6.0 * c3 * t
        }
        Vec2::new(second(&self.x, t), second(&self.y, t))
    }
}

impl From<CubicBez> for CachedCubicBez {
    #[inline]
    fn from(curve: CubicBez) -> Self {
        CachedCubicBez::new(curve)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, CachedCubicBez, CubicBez, ParamCurve, Point};

    fn assert_agrees(cached: &CachedCubicBez) {
        let c = cached.curve();
        for i in 0..=20 {
            let t = i as f64 * 0.05;
            assert!(cached.eval(t).distance(c.eval(t)) < 1e-12);
            assert!((cached.deriv(t) - c.deriv(t)).hypot() < 1e-12);
            assert!((cached.deriv2(t) - c.deriv2(t)).hypot() < 1e-12);
        }
    }

    #[test]
    fn cached_matches_curve() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let cached = CachedCubicBez::from(c);
        assert_agrees(&cached);
        assert_eq!(cached.eval(0.5), Point::new(0.5, 0.75));
        assert_eq!(
            cached.polynomial(Axis::Vertical),
            c.polynomial(Axis::Vertical)
        );
    }

    #[test]
    fn set_control_recomputes() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let mut cached = CachedCubicBez::new(c);
        cached.set_control(1, Point::new(-2.0, 3.0)).unwrap();
        assert_eq!(cached.curve().p1, Point::new(-2.0, 3.0));
        assert_agrees(&cached);
        assert_eq!(cached, CachedCubicBez::new(cached.curve()));

        cached.set_control(3, Point::new(4.0, -1.0)).unwrap();
        assert_agrees(&cached);
        assert!(cached.eval(1.0).distance(Point::new(4.0, -1.0)) < 1e-12);
    }

    #[test]
    fn set_control_out_of_range() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let mut cached = CachedCubicBez::new(c);
        let err = cached.set_control(4, Point::ORIGIN).unwrap_err();
        assert_eq!(err.index(), 4);
        assert_eq!(err.bound(), 4);
        assert_eq!(cached.curve(), c);
    }
}
