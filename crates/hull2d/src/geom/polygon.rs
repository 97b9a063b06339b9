//! Checks on finished hulls.
//!
//! - `signed_area`: shoelace area, positive for CCW vertex order.
//! - `is_strictly_convex`: every cyclic vertex triple turns strictly left.
//! - `contains_eps`: inside-or-on test against a CCW convex polygon.
//! - `same_cycle`: equality of two vertex sequences up to rotation.

use super::{orientation, Point};

/// Signed area of the polygon (positive if the vertices run counterclockwise).
pub fn signed_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// `true` if `poly` has at least three vertices and turns strictly left at each one.
pub fn is_strictly_convex(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) > 0.0)
}

/// `true` if `p` lies inside or on the CCW convex polygon `poly`.
///
/// `eps` is an absolute slack on the orientation value of every edge test;
/// positive values enlarge the polygon.
pub fn contains_eps(poly: &[Point], p: Point, eps: f64) -> bool {
    let n = poly.len();
    (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], p) >= -eps)
}

/// `true` if `a` and `b` are the same cyclic sequence, i.e. `b` is a rotation of `a`.
pub fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n)
        .filter(|&shift| b[shift] == a[0])
        .any(|shift| (0..n).all(|i| a[i] == b[(i + shift) % n]))
}
