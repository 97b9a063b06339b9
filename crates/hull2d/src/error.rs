//! Errors reported by the checked hull entry points and by algorithm-name parsing.
//!
//! The raw algorithms never return errors; `geom::validate_points` rejects the
//! inputs they do not support before dispatch.

use thiserror::Error;

/// Why a point set was rejected before computing its hull.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three points were given.
    #[error("convex hull needs at least 3 points, got {0}")]
    InsufficientPoints(usize),

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Two input points coincide.
    #[error("points {first} and {second} coincide")]
    DuplicatePoints { first: usize, second: usize },

    /// All points lie on a single line, so the hull has no interior.
    #[error("all {0} points are collinear")]
    DegenerateInput(usize),
}

/// Unrecognized algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown hull algorithm `{0}` (try gift-wrapping, graham-scan, monotone-chain, quickhull)"
)]
pub struct UnknownAlgorithm(pub String);
