// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Add, Index, IndexMut, Range, Sub};

use arrayvec::ArrayVec;

use crate::common::{different_signs, sort_roots};
use crate::{
    Axis, Circle, Cubic, IndexError, Nearest, ParamCurve, ParamCurveArclen, ParamCurveExtrema,
    Point, Rect, Vec2, MAX_EXTREMA,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The number of samples [`CubicBez::nearest`] scans for candidates.
pub const DEFAULT_PROJECT_SUBDIVISIONS: usize = 16;

/// The number of Newton steps [`CubicBez::nearest`] applies to each candidate.
pub const DEFAULT_PROJECT_ITERATIONS: usize = 4;

/// A single cubic Bézier segment.
///
/// The curve is `B(t) = (1-t)³p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³p3`. Queries
/// accept any real `t`; values outside `[0, 1]` extrapolate the curve.
///
/// Equality is exact, coordinate by coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

/// The intermediate points of one de Casteljau evaluation.
///
/// Every derivative accessor reads from this, so combined queries give
/// exactly the same numbers as the single-purpose ones.
struct Casteljau {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    e: Point,
    p: Point,
}

impl Casteljau {
    #[inline]
    fn deriv(&self) -> Vec2 {
        3.0 * (self.e - self.d)
    }

    #[inline]
    fn deriv2(&self) -> Vec2 {
        6.0 * ((self.c - self.b) - (self.b - self.a))
    }
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    #[inline]
    fn casteljau(&self, t: f64) -> Casteljau {
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        let p = d.lerp(e, t);
        Casteljau { a, b, c, d, e, p }
    }

    /// The control points, in order.
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// The control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if `index` is greater than 3.
    #[inline]
    pub fn control(&self, index: usize) -> Result<Point, IndexError> {
        self.points()
            .get(index)
            .copied()
            .ok_or(IndexError::new(index, 4))
    }

    /// The first derivative (velocity) at `t`.
    #[inline]
    pub fn deriv(&self, t: f64) -> Vec2 {
        self.casteljau(t).deriv()
    }

    /// The second derivative (acceleration) at `t`.
    #[inline]
    pub fn deriv2(&self, t: f64) -> Vec2 {
        self.casteljau(t).deriv2()
    }

    /// The third derivative, which is constant for a cubic.
    #[inline]
    pub fn deriv3(&self) -> Vec2 {
        6.0 * (3.0 * (self.p1 - self.p2) + (self.p3 - self.p0))
    }

    /// The point and first derivative at `t`.
    #[inline]
    pub fn point_and_deriv(&self, t: f64) -> (Point, Vec2) {
        let c = self.casteljau(t);
        (c.p, c.deriv())
    }

    /// The point and unit tangent at `t`.
    ///
    /// See [`CubicBez::tangent`] for the behavior at a cusp.
    #[inline]
    pub fn point_and_tangent(&self, t: f64) -> (Point, Vec2) {
        let c = self.casteljau(t);
        (c.p, c.deriv().normalize())
    }

    /// The first and second derivatives at `t`.
    #[inline]
    pub fn derivs(&self, t: f64) -> (Vec2, Vec2) {
        let c = self.casteljau(t);
        (c.deriv(), c.deriv2())
    }

    /// The first, second and third derivatives at `t`.
    #[inline]
    pub fn all_derivs(&self, t: f64) -> (Vec2, Vec2, Vec2) {
        let c = self.casteljau(t);
        (c.deriv(), c.deriv2(), self.deriv3())
    }

    /// The point and its first and second derivatives at `t`.
    #[inline]
    pub fn point_and_derivs(&self, t: f64) -> (Point, Vec2, Vec2) {
        let c = self.casteljau(t);
        (c.p, c.deriv(), c.deriv2())
    }

    /// The unit tangent at `t`.
    ///
    /// Where the derivative vanishes (a cusp, or coincident control points at
    /// an end), there is no direction to normalize and the result is `NaN`.
    #[inline]
    pub fn tangent(&self, t: f64) -> Vec2 {
        self.deriv(t).normalize()
    }

    /// The unit normal at `t`: the tangent turned counter-clockwise.
    #[inline]
    pub fn normal(&self, t: f64) -> Vec2 {
        self.tangent(t).turn_90()
    }

    /// The angle of the tangent at `t`, in radians.
    #[inline]
    pub fn angle(&self, t: f64) -> f64 {
        self.deriv(t).atan2()
    }

    /// The signed curvature at `t`.
    ///
    /// This is `cross(v, a) / |v|³`, positive where the curve turns
    /// counter-clockwise (in a y-up coordinate system). The result is not
    /// finite where the velocity is zero.
    #[inline]
    pub fn curvature(&self, t: f64) -> f64 {
        let (d1, d2) = self.derivs(t);
        let speed = d1.hypot();
        d1.cross(d2) / (speed * speed * speed)
    }

    /// The osculating circle at `t`.
    ///
    /// At an inflection point the curvature is zero and the radius is
    /// infinite; the center is then not finite either. No attempt is made
    /// to paper over this, so check [`Circle::is_finite`] when it matters.
    pub fn osculating_circle(&self, t: f64) -> Circle {
        let (point, d1, d2) = self.point_and_derivs(t);
        let speed = d1.hypot();
        let curvature = d1.cross(d2) / (speed * speed * speed);
        let signed_radius = curvature.recip();
        let normal = d1.normalize().turn_90();
        Circle::new(point + normal * signed_radius, signed_radius.abs())
    }

    /// Split the curve at `t`, using de Casteljau.
    ///
    /// The first curve covers `[0, t]` and the second `[t, 1]`, each
    /// reparameterized to `[0, 1]`. The split point is shared exactly. Values
    /// of `t` outside `[0, 1]` give an extrapolated split.
    pub fn subdivide_at(&self, t: f64) -> (CubicBez, CubicBez) {
        let Casteljau { a, b: _, c, d, e, p } = self.casteljau(t);
        (
            CubicBez::new(self.p0, a, d, p),
            CubicBez::new(p, e, c, self.p3),
        )
    }

    /// Returns a cubic Bézier with the same shape, traversed in the opposite
    /// direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> CubicBez {
        CubicBez::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// The component of the curve along `axis`, as a polynomial in `t`.
    #[inline]
    pub fn polynomial(&self, axis: Axis) -> Cubic {
        Cubic::from_bernstein(
            self.p0[axis],
            self.p1[axis],
            self.p2[axis],
            self.p3[axis],
        )
    }

    /// Parameters of the local extrema along one axis.
    ///
    /// These are the roots of the derivative of [`CubicBez::polynomial`]
    /// strictly inside `(0, 1)`, in increasing order.
    pub fn extrema_along(&self, axis: Axis) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        for t in self.polynomial(axis).deriv().roots() {
            if t > 0.0 && t < 1.0 {
                result.push(t);
            }
        }
        result
    }

    /// The points of the local extrema along one axis.
    pub fn extrema_points(&self, axis: Axis) -> ArrayVec<Point, 2> {
        self.extrema_along(axis)
            .into_iter()
            .map(|t| self.eval(t))
            .collect()
    }

    /// The minimum and maximum coordinate the curve reaches along `axis`.
    fn range_along(&self, axis: Axis) -> (f64, f64) {
        let (v0, v3) = (self.p0[axis], self.p3[axis]);
        let mut min = v0.min(v3);
        let mut max = v0.max(v3);
        for t in self.extrema_along(axis) {
            let v = self.eval(t)[axis];
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Approximate arc length, from a polyline through `accuracy` evenly
    /// spaced samples.
    ///
    /// With `accuracy` of 2 or less this is the distance between the
    /// endpoints. There's no error bound; for a length with a guaranteed
    /// tolerance use [`ParamCurveArclen::arclen`].
    pub fn length(&self, accuracy: usize) -> f64 {
        if accuracy <= 2 {
            return self.p0.distance(self.p3);
        }
        let last = (accuracy - 1) as f64;
        let mut prev = self.p0;
        let mut total = 0.0;
        for i in 1..accuracy {
            let p = self.eval(i as f64 / last);
            total += prev.distance(p);
            prev = p;
        }
        total
    }

    /// Find the position on the curve closest to `p`.
    ///
    /// Distance extrema are where `dot(B(t) - p, B'(t))` changes sign. The
    /// function is sampled at `initial_subdivisions` evenly spaced parameters,
    /// and the midpoint of each sign change (at most three) is refined with
    /// `refinement_iterations` Newton steps. The best of those and the two
    /// endpoints is returned.
    ///
    /// This is an approximation whose quality grows with both counts.
    /// Candidates that Newton iteration pushes outside `[0, 1]` are dropped,
    /// so the result always lies on the segment.
    pub fn project_point(
        &self,
        p: Point,
        initial_subdivisions: usize,
        refinement_iterations: usize,
    ) -> Nearest {
        // Relative to the query point, the curve value is the offset from it.
        let rel = *self - p.to_vec2();
        let dist_deriv = |t: f64| {
            let (pt, d) = rel.point_and_deriv(t);
            pt.to_vec2().dot(d)
        };

        let mut candidates = ArrayVec::<f64, 3>::new();
        if initial_subdivisions >= 2 {
            let last = (initial_subdivisions - 1) as f64;
            let mut t0 = 0.0;
            let mut f0 = dist_deriv(t0);
            for i in 1..initial_subdivisions {
                let t1 = i as f64 / last;
                let f1 = dist_deriv(t1);
                if different_signs(f0, f1) {
                    candidates.push(0.5 * (t0 + t1));
                    if candidates.is_full() {
                        break;
                    }
                }
                t0 = t1;
                f0 = f1;
            }
        }

        let mut best = Nearest {
            t: 0.0,
            point: self.p0,
            distance_sq: self.p0.distance_squared(p),
        };
        let end_dist = self.p3.distance_squared(p);
        if end_dist < best.distance_sq {
            best = Nearest {
                t: 1.0,
                point: self.p3,
                distance_sq: end_dist,
            };
        }
        for mut t in candidates {
            for _ in 0..refinement_iterations {
                let (pt, d1, d2) = rel.point_and_derivs(t);
                let pt = pt.to_vec2();
                t -= pt.dot(d1) / (pt.dot(d2) + d1.dot(d1));
                if !t.is_finite() {
                    break;
                }
            }
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let point = self.eval(t);
            let distance_sq = point.distance_squared(p);
            if distance_sq < best.distance_sq {
                best = Nearest {
                    t,
                    point,
                    distance_sq,
                };
            }
        }
        best
    }

    /// Find the position on the curve closest to `p`, with default effort.
    ///
    /// This is [`CubicBez::project_point`] with
    /// [`DEFAULT_PROJECT_SUBDIVISIONS`] and [`DEFAULT_PROJECT_ITERATIONS`].
    #[inline]
    pub fn nearest(&self, p: Point) -> Nearest {
        self.project_point(p, DEFAULT_PROJECT_SUBDIVISIONS, DEFAULT_PROJECT_ITERATIONS)
    }

    /// Is this cubic Bézier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bézier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.casteljau(t).p
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let (p0, d0) = self.point_and_deriv(t0);
        let (p3, d1) = self.point_and_deriv(t1);
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * d0;
        let p2 = p3 - scale * d1;
        CubicBez { p0, p1, p2, p3 }
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        self.subdivide_at(0.5)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arc length of a cubic Bézier segment.
    ///
    /// This algorithm is based on "Adaptive subdivision and the length and
    /// energy of Bézier curves" by Jens Gravesen.
    fn arclen(&self, accuracy: f64) -> f64 {
        // Estimate for a single segment.
        fn calc_l0(c: &CubicBez) -> f64 {
            let lc = (c.p3 - c.p0).hypot();
            let lp = (c.p1 - c.p0).hypot() + (c.p2 - c.p1).hypot() + (c.p3 - c.p2).hypot();
            (lc + lp) * 0.5
        }
        const MAX_DEPTH: usize = 16;
        fn rec(c: &CubicBez, l0: f64, accuracy: f64, depth: usize) -> f64 {
            let (c0, c1) = c.subdivide();
            let l0_c0 = calc_l0(&c0);
            let l0_c1 = calc_l0(&c1);
            let l1 = l0_c0 + l0_c1;
            let error = (l0 - l1) * (1.0 / 15.0);
            if error.abs() < accuracy || depth == MAX_DEPTH {
                l1 - error
            } else {
                rec(&c0, l0_c0, accuracy * 0.5, depth + 1)
                    + rec(&c1, l0_c1, accuracy * 0.5, depth + 1)
            }
        }
        rec(self, calc_l0(self), accuracy, 0)
    }
}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        for axis in Axis::ALL {
            result.extend(self.extrema_along(axis));
        }
        sort_roots(&mut result);
        result
    }

    /// The tight axis-aligned bounding box.
    ///
    /// Each axis is seeded with the endpoints and widened by the curve's
    /// interior extrema along that axis, so the result is exact rather than
    /// sampled.
    fn bounding_box(&self) -> Rect {
        let (x0, x1) = self.range_along(Axis::Horizontal);
        let (y0, y1) = self.range_along(Axis::Vertical);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Control points by position, `p0` at index 0.
///
/// # Panics
///
/// Panics if the index is greater than 3. Use [`CubicBez::control`] for a
/// checked lookup.
impl Index<usize> for CubicBez {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        match index {
            0 => &self.p0,
            1 => &self.p1,
            2 => &self.p2,
            3 => &self.p3,
            _ => panic!("{}", IndexError::new(index, 4)),
        }
    }
}

impl IndexMut<usize> for CubicBez {
    fn index_mut(&mut self, index: usize) -> &mut Point {
        match index {
            0 => &mut self.p0,
            1 => &mut self.p1,
            2 => &mut self.p2,
            3 => &mut self.p3,
            _ => panic!("{}", IndexError::new(index, 4)),
        }
    }
}

impl Add<Vec2> for CubicBez {
    type Output = CubicBez;

    #[inline]
    fn add(self, v: Vec2) -> CubicBez {
        CubicBez::new(self.p0 + v, self.p1 + v, self.p2 + v, self.p3 + v)
    }
}

impl Sub<Vec2> for CubicBez {
    type Output = CubicBez;

    #[inline]
    fn sub(self, v: Vec2) -> CubicBez {
        CubicBez::new(self.p0 - v, self.p1 - v, self.p2 - v, self.p3 - v)
    }
}
