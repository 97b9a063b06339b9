//! Planar geometry shared by every hull algorithm.
//!
//! Purpose
//! - One point type (`Point`) and the handful of predicates all four hull
//!   algorithms reduce to: orientation sign, lexicographic order, angular
//!   order around a pivot, and distance to a line.
//! - Checks on finished polygons (convexity, containment, cyclic equality)
//!   and input validation for the checked entry points.
//! - Reproducible random point sources for tests, benches and the CLI.
//!
//! Conventions
//! - Counter-clockwise is positive: `orientation(a, b, c) > 0` means `c` is
//!   left of the directed segment `a → b`.
//! - Plain `f64` arithmetic throughout; no exact predicates.

pub mod polygon;
mod predicates;
pub mod rand;
mod validate;

pub use polygon::{contains_eps, is_strictly_convex, same_cycle, signed_area};
pub use predicates::{
    ccw_cmp, distance_to_line, farthest_from, is_left_of, lexicographic_cmp, orientation,
};
pub use validate::validate_points;

/// A point in the plane.
pub type Point = nalgebra::Point2<f64>;
