//! Planar convex hulls.
//!
//! Four algorithms for the same problem, sharing one set of geometric
//! primitives:
//! - gift wrapping (Jarvis march), O(n·h)
//! - Graham scan, O(n log n)
//! - Andrew's monotone chain, O(n log n)
//! - QuickHull, O(n log n) expected
//!
//! Every algorithm returns the hull vertices counterclockwise, starting at the
//! lexicographically smallest point, so results compare with `==`.
//!
//! ```
//! use hull2d::prelude::*;
//! use nalgebra::point;
//!
//! let points = [
//!     point![0.0, 0.0],
//!     point![4.0, 0.0],
//!     point![4.0, 4.0],
//!     point![0.0, 4.0],
//!     point![2.0, 2.0],
//! ];
//! let hull = convex_hull(&points, Algorithm::GrahamScan).unwrap();
//! assert_eq!(hull, &points[..4]);
//! ```

pub mod error;
pub mod geom;
pub mod hull;

pub use error::{HullError, UnknownAlgorithm};
pub use geom::Point;
pub use hull::{convex_hull, gift_wrapping, graham_scan, monotone_chain, quickhull, Algorithm};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_on_circle, draw_uniform, PointCloudCfg, ReplayToken};
    pub use crate::geom::{
        contains_eps, is_strictly_convex, orientation, same_cycle, validate_points, Point,
    };
    pub use crate::hull::{convex_hull, Algorithm};
    pub use crate::HullError;
}
