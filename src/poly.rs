// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomials in the power basis, of degree at most three.

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_quadratic, sort_roots};

/// A polynomial of degree at most two, `c0 + c1 x + c2 x²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    /// Coefficients, constant term first.
    pub coeffs: [f64; 3],
}

/// A polynomial of degree at most three, `c0 + c1 x + c2 x² + c3 x³`.
///
/// The component of a cubic Bézier along one axis is such a polynomial in
/// the curve parameter; see [`Cubic::from_bernstein`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    /// Coefficients, constant term first.
    pub coeffs: [f64; 4],
}

impl Quadratic {
    /// Create a quadratic from its coefficients, constant term first.
    #[inline]
    pub const fn new(coeffs: [f64; 3]) -> Self {
        Quadratic { coeffs }
    }

    /// Evaluate the polynomial at `x`, using Horner's method.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let [c0, c1, c2] = self.coeffs;
        c0 + x * (c1 + x * c2)
    }

    /// The real roots, in increasing order.
    ///
    /// If every coefficient is zero, a single root at `0.0` is reported.
    #[inline]
    pub fn roots(&self) -> ArrayVec<f64, 2> {
        let [c0, c1, c2] = self.coeffs;
        solve_quadratic(c0, c1, c2)
    }
}

impl Cubic {
    /// Create a cubic from its coefficients, constant term first.
    #[inline]
    pub const fn new(coeffs: [f64; 4]) -> Self {
        Cubic { coeffs }
    }

    /// Convert from the cubic Bernstein basis.
    ///
    /// The arguments are the coefficients of `(1-t)³`, `3(1-t)²t`, `3(1-t)t²`
    /// and `t³`; for a Bézier curve these are the control point coordinates
    /// along one axis.
    #[inline]
    pub fn from_bernstein(b0: f64, b1: f64, b2: f64, b3: f64) -> Self {
        Cubic {
            coeffs: [
                b0,
                3.0 * (b1 - b0),
                3.0 * (b0 - 2.0 * b1 + b2),
                b3 - b0 + 3.0 * (b1 - b2),
            ],
        }
    }

    /// Evaluate the polynomial at `x`, using Horner's method.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs;
        c0 + x * (c1 + x * (c2 + x * c3))
    }

    /// The derivative.
    #[inline]
    pub fn deriv(&self) -> Quadratic {
        let [_, c1, c2, c3] = self.coeffs;
        Quadratic::new([c1, 2.0 * c2, 3.0 * c3])
    }

    /// Is every coefficient exactly zero?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    /// The real roots, in increasing order.
    ///
    /// A cubic with a vanishing leading coefficient is solved as a
    /// quadratic (or linear) equation. If every coefficient is zero, a single
    /// root at `0.0` is reported even though every `x` is a solution.
    pub fn roots(&self) -> ArrayVec<f64, 3> {
        let [c0, c1, c2, c3] = self.coeffs;
        let mut roots = solve_cubic(c0, c1, c2, c3);
        sort_roots(&mut roots);
        roots
    }
}
