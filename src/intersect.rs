// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of cubic Béziers with lines, rays and line segments.

use core::ops::RangeInclusive;

use arrayvec::ArrayVec;

use crate::{Cubic, CubicBez, Line, ParamCurve, Point, Ray, Segment, Vec2};

/// The closest hit of a ray against a curve, as found by [`CubicBez::raycast`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// The curve parameter of the hit.
    pub t: f64,
    /// The hit position.
    pub point: Point,
    /// The distance from the ray origin to `point`, measured along the ray.
    pub distance: f64,
}

impl CubicBez {
    /// Find where the curve crosses a line, optionally restricted to part of it.
    ///
    /// The line passes through `origin` along `direction`. The result holds
    /// the curve parameters of the crossings in `[0, 1]` (endpoints included),
    /// in increasing order.
    ///
    /// When `along` is given, a crossing is kept only if
    /// `direction.dot(point - origin)` lies in that range. Note the units: for
    /// an unnormalized `direction` this is the distance along the line scaled
    /// by `|direction|`, so the far end of a segment from `origin` to
    /// `origin + direction` is at `|direction|²`.
    ///
    /// If the whole curve lies on the line the crossings are not isolated. In
    /// that case the curve's endpoints, `t = 0` and `t = 1`, are reported
    /// (still subject to `along`).
    ///
    /// A zero `direction` does not define a line, so nothing is reported. This
    /// covers zero-length segments as well.
    pub fn intersect_with(
        &self,
        origin: Point,
        direction: Vec2,
        along: Option<RangeInclusive<f64>>,
    ) -> ArrayVec<f64, 3> {
        let mut result = ArrayVec::new();
        if direction.hypot2() == 0.0 {
            return result;
        }
        let rel = self.points().map(|p| p - origin);
        let [a, b, c, d] = rel.map(|v| direction.cross(v));
        let across = Cubic::from_bernstein(a, b, c, d);
        if across.is_zero() {
            result.push(0.0);
            result.push(1.0);
        } else {
            for t in across.roots() {
                if (0.0..=1.0).contains(&t) {
                    result.push(t);
                }
            }
        }

        if let Some(range) = along {
            let [a, b, c, d] = rel.map(|v| direction.dot(v));
            let along_poly = Cubic::from_bernstein(a, b, c, d);
            result.retain(|t| range.contains(&along_poly.eval(*t)));
        }
        result
    }

    /// Parameters where the curve crosses an infinite line.
    #[inline]
    pub fn intersect_line(&self, line: Line) -> ArrayVec<f64, 3> {
        self.intersect_with(line.origin, line.direction, None)
    }

    /// Parameters where the curve crosses a ray.
    #[inline]
    pub fn intersect_ray(&self, ray: Ray) -> ArrayVec<f64, 3> {
        self.intersect_with(ray.origin, ray.direction, Some(0.0..=f64::INFINITY))
    }

    /// Parameters where the curve crosses a line segment.
    #[inline]
    pub fn intersect_segment(&self, segment: Segment) -> ArrayVec<f64, 3> {
        let direction = segment.direction();
        self.intersect_with(segment.start, direction, Some(0.0..=direction.hypot2()))
    }

    /// The points where the curve crosses an infinite line.
    pub fn intersection_points(&self, line: Line) -> ArrayVec<Point, 3> {
        self.intersect_line(line)
            .into_iter()
            .map(|t| self.eval(t))
            .collect()
    }

    /// Cast a ray against the curve.
    ///
    /// Returns the hit nearest to the ray origin, provided it is no further
    /// than `max_dist` (in the same units as the coordinates). If two hits are
    /// equally near, the one with the smaller curve parameter wins.
    pub fn raycast(&self, ray: Ray, max_dist: f64) -> Option<RayHit> {
        let len = ray.direction.hypot();
        let mut best: Option<RayHit> = None;
        for t in self.intersect_ray(ray) {
            let point = self.eval(t);
            let distance = ray.direction.dot(point - ray.origin) / len;
            if !(0.0..=max_dist).contains(&distance) {
                continue;
            }
            if best.is_some_and(|hit| hit.distance <= distance) {
                continue;
            }
            best = Some(RayHit { t, point, distance });
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{CubicBez, Line, ParamCurve, Point, Ray, Segment, Vec2};

    fn arch() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0))
    }

    #[test]
    fn intersect_horizontal_line() {
        let c = arch();
        let line = Line::new((0.0, 0.5), (1.0, 0.0));
        let ts = c.intersect_line(line);
        assert_eq!(ts.len(), 2);
        assert!(ts[0] < ts[1]);
        for t in &ts {
            assert!((0.0..=1.0).contains(t));
            assert!((c.eval(*t).y - 0.5).abs() < 1e-12);
        }
        let expected = 3.0f64.sqrt() / 6.0;
        assert!((ts[0] - (0.5 - expected)).abs() < 1e-12);
        assert!((ts[1] - (0.5 + expected)).abs() < 1e-12);

        let points = c.intersection_points(line);
        assert_eq!(points.len(), 2);
        assert!(points[0].x < 0.5 && points[1].x > 0.5);
    }

    #[test]
    fn intersect_misses() {
        let c = arch();
        assert!(c.intersect_line(Line::new((0.0, 2.0), (1.0, 0.0))).is_empty());
        // Crossings outside [0, 1] are dropped.
        assert!(c.intersect_line(Line::new((2.0, 0.0), (0.0, 1.0))).is_empty());
    }

    #[test]
    fn intersect_endpoints_count() {
        let c = arch();
        let ts = c.intersect_line(Line::new((0.0, 0.0), (1.0, 0.0)));
        assert_eq!(ts.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn intersect_ray_direction() {
        let c = arch();
        let right = c.intersect_ray(Ray::new((0.5, 0.5), (1.0, 0.0)));
        assert_eq!(right.len(), 1);
        assert!(c.eval(right[0]).x > 0.5);
        let left = c.intersect_ray(Ray::new((0.5, 0.5), (-3.0, 0.0)));
        assert_eq!(left.len(), 1);
        assert!(c.eval(left[0]).x < 0.5);
        assert!(c.intersect_ray(Ray::new((2.0, 0.5), (1.0, 0.0))).is_empty());
    }

    #[test]
    fn intersect_segment_range() {
        let c = arch();
        let ts = c.intersect_segment(Segment::new((0.0, 0.5), (0.5, 0.5)));
        assert_eq!(ts.len(), 1);
        assert!(c.eval(ts[0]).x < 0.5);
        // Scaling the segment must not change which hits lie on it.
        let ts = c.intersect_segment(Segment::new((0.0, 0.5), (10.0, 0.5)));
        assert_eq!(ts.len(), 2);
        let ts = c.intersect_segment(Segment::new((0.2, 0.5), (0.8, 0.5)));
        assert!(ts.is_empty());
        let ts = c.intersect_segment(Segment::new((0.5, 0.5), (-0.5, 0.5)));
        assert_eq!(ts.len(), 1);
    }

    #[test]
    fn intersect_colinear_curve() {
        let c = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let ts = c.intersect_line(Line::through(c.p0, c.p3));
        assert_eq!(ts.as_slice(), &[0.0, 1.0]);
        let ts = c.intersect_ray(Ray::new((-1.0, 0.0), (1.0, 0.0)));
        assert_eq!(ts.as_slice(), &[0.0, 1.0]);
        let ts = c.intersect_ray(Ray::new((1.5, 0.0), (1.0, 0.0)));
        assert_eq!(ts.as_slice(), &[1.0]);
        let ts = c.intersect_segment(Segment::new((1.0, 0.0), (2.0, 0.0)));
        assert!(ts.is_empty());
    }

    #[test]
    fn intersect_zero_direction() {
        let c = arch();
        assert!(c
            .intersect_segment(Segment::new((100.0, 100.0), (100.0, 100.0)))
            .is_empty());
        // Even a point that lies on the curve is not a segment.
        assert!(c.intersect_segment(Segment::new(c.p0, c.p0)).is_empty());
        assert!(c
            .intersect_line(Line::new((50.0, -7.0), Vec2::ZERO))
            .is_empty());
        assert!(c.intersect_ray(Ray::new((50.0, -7.0), Vec2::ZERO)).is_empty());
        assert!(c.raycast(Ray::new((0.5, 0.5), Vec2::ZERO), f64::INFINITY).is_none());
        assert!(c.intersection_points(Line::new(c.p0, Vec2::ZERO)).is_empty());
    }

    #[test]
    fn raycast_tie_prefers_smaller_t() {
        // A closed colinear curve: both endpoints sit at the same spot.
        let c = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0));
        let ray = Ray::new((-1.0, 0.0), (1.0, 0.0));
        assert_eq!(c.intersect_ray(ray).as_slice(), &[0.0, 1.0]);
        let hit = c.raycast(ray, 10.0).unwrap();
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.point, Point::ORIGIN);
        assert_eq!(hit.distance, 1.0);
        let hit = c.reversed().raycast(ray, 10.0).unwrap();
        assert_eq!(hit.t, 0.0);
    }

    #[test]
    fn raycast_nearest() {
        let c = arch();
        let hit = c.raycast(Ray::new((-1.0, 0.5), (2.0, 0.0)), f64::INFINITY).unwrap();
        let ts = c.intersect_line(Line::new((0.0, 0.5), (1.0, 0.0)));
        assert_eq!(hit.t, ts[0]);
        assert_eq!(hit.point, c.eval(ts[0]));
        assert!((hit.distance - (hit.point.x + 1.0)).abs() < 1e-12);

        let hit = c.raycast(Ray::new((2.0, 0.5), (-1.0, 0.0)), 10.0).unwrap();
        assert_eq!(hit.t, ts[1]);
    }

    #[test]
    fn raycast_max_dist() {
        let c = arch();
        let ray = Ray::new((0.5, 2.0), (0.0, -1.0));
        let hit = c.raycast(ray, 2.0).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert!((hit.distance - 1.25).abs() < 1e-12);
        assert!(c.raycast(ray, 1.0).is_none());
        assert!(c.raycast(Ray::new((0.5, 2.0), (0.0, 1.0)), 100.0).is_none());
    }

    #[test]
    fn intersections_lie_on_line() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pt = move || {
            Point::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            )
        };
        for _ in 0..100 {
            let c = CubicBez::new(pt(), pt(), pt(), pt());
            let line = Line::through(pt(), pt());
            for t in c.intersect_line(line) {
                let dist = line.signed_distance(c.eval(t));
                assert!(dist.abs() < 1e-6, "{c:?} {line:?} t={t} dist={dist}");
            }
        }
    }
}
