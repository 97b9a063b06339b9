//! Planar convex hulls: gift wrapping, Graham scan, monotone chain, QuickHull.
//!
//! Contract (all four)
//! - Input: a point slice; never mutated.
//! - Output: hull vertices in counterclockwise order, starting at the
//!   lexicographically smallest point. Interior points are dropped.
//! - Assumes at least three distinct points, not all collinear, and no
//!   collinear points on the hull boundary. Fewer than three points come back
//!   sorted lexicographically; other violations give unspecified output. Use
//!   [`convex_hull`] to validate first.
//!
//! Complexity
//! - Gift wrapping: O(n·h). Graham scan, monotone chain: O(n log n).
//!   QuickHull: O(n log n) expected, O(n²) worst case.

mod gift_wrapping;
mod graham_scan;
mod monotone_chain;
mod quickhull;

use std::fmt;
use std::str::FromStr;

pub use gift_wrapping::gift_wrapping;
pub use graham_scan::graham_scan;
pub use monotone_chain::monotone_chain;
pub use quickhull::quickhull;

use crate::error::{HullError, UnknownAlgorithm};
use crate::geom::{lexicographic_cmp, validate_points, Point};

/// Hull algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    GiftWrapping,
    GrahamScan,
    MonotoneChain,
    QuickHull,
}

impl Algorithm {
    /// Every algorithm, in a fixed order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GiftWrapping,
        Algorithm::GrahamScan,
        Algorithm::MonotoneChain,
        Algorithm::QuickHull,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GiftWrapping => "gift-wrapping",
            Algorithm::GrahamScan => "graham-scan",
            Algorithm::MonotoneChain => "monotone-chain",
            Algorithm::QuickHull => "quickhull",
        }
    }

    /// Run the algorithm without validating `points`.
    #[inline]
    pub fn run(self, points: &[Point]) -> Vec<Point> {
        match self {
            Algorithm::GiftWrapping => gift_wrapping(points),
            Algorithm::GrahamScan => graham_scan(points),
            Algorithm::MonotoneChain => monotone_chain(points),
            Algorithm::QuickHull => quickhull(points),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "gift-wrapping" | "gift" | "jarvis" => Ok(Algorithm::GiftWrapping),
            "graham-scan" | "graham" => Ok(Algorithm::GrahamScan),
            "monotone-chain" | "chain" | "andrew" => Ok(Algorithm::MonotoneChain),
            "quickhull" | "quick-hull" | "quick" => Ok(Algorithm::QuickHull),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Validate `points`, then compute their hull with `algorithm`.
pub fn convex_hull(points: &[Point], algorithm: Algorithm) -> Result<Vec<Point>, HullError> {
    validate_points(points)?;
    Ok(algorithm.run(points))
}

/// Output for inputs too small to have a hull.
fn sorted_copy(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(lexicographic_cmp);
    pts
}

#[cfg(test)]
mod tests;
