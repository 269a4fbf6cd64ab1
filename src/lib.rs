// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric queries on 2D cubic Bézier curves.
//!
//! The central type is [`CubicBez`], a single cubic Bézier segment defined by
//! four control points. It answers the questions an editor, a renderer or a
//! hit tester typically asks of a curve: where is it at `t`, which way is it
//! heading, how sharply does it bend, where does it cross a line, how long is
//! it, and which of its points is closest to a given point.
//!
//! All computations are pure functions of the control points. Results with a
//! small upper bound on their size (roots, extrema, intersections) are
//! returned in stack-allocated [`ArrayVec`]s.
//!
//! # Examples
//!
//! ```
//! use cubic_bez::{CubicBez, Line, ParamCurve, ParamCurveExtrema, Point, Rect};
//!
//! let arch = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
//! assert_eq!(arch.eval(0.5), Point::new(0.5, 0.75));
//! assert_eq!(arch.bounding_box(), Rect::new(0.0, 0.0, 1.0, 0.75));
//!
//! let crossings = arch.intersect_line(Line::new((0.0, 0.5), (1.0, 0.0)));
//! assert_eq!(crossings.len(), 2);
//!
//! let nearest = arch.nearest(Point::new(0.5, 2.0));
//! assert!((nearest.t - 0.5).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion between [`Point`], [`Vec2`] and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for using these types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! No allocator is needed.
//!
//! [`ArrayVec`]: arrayvec::ArrayVec
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names, reason = "math notation")]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::allow_attributes,
    clippy::use_self,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::shadow_unrelated,
    reason = "deferred"
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cubic-bez requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

mod axis;
mod cached;
mod circle;
pub mod common;
mod cubicbez;
mod error;
mod intersect;
mod line;
mod param_curve;
mod point;
mod poly;
mod rect;
mod vec2;

pub use crate::axis::Axis;
pub use crate::cached::CachedCubicBez;
pub use crate::circle::Circle;
pub use crate::cubicbez::{CubicBez, DEFAULT_PROJECT_ITERATIONS, DEFAULT_PROJECT_SUBDIVISIONS};
pub use crate::error::IndexError;
pub use crate::intersect::RayHit;
pub use crate::line::{Line, Ray, Segment};
pub use crate::param_curve::{
    Nearest, ParamCurve, ParamCurveArclen, ParamCurveExtrema, MAX_EXTREMA,
};
pub use crate::point::Point;
pub use crate::poly::{Cubic, Quadratic};
pub use crate::rect::Rect;
pub use crate::vec2::Vec2;
