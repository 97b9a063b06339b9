use crate::geom::{ccw_cmp, lexicographic_cmp, orientation, Point};

/// Graham scan convex hull, CCW from the lexicographic minimum.
///
/// The remaining points are sorted by angle around the pivot, then scanned
/// once with a stack that stays a convex chain: before pushing a point, pop
/// while the top two stack points and the new point fail to turn strictly left.
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return super::sorted_copy(points);
    }

    // Put the leftmost point at index 0 of a private copy.
    let mut pts = points.to_vec();
    let pivot_index = pts
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| lexicographic_cmp(a, b))
        .map_or(0, |(i, _)| i);
    pts.swap(0, pivot_index);
    let pivot = pts[0];

    // Total on general-position input; see `ccw_cmp` for the near-collinear caveat.
    pts[1..].sort_by(|a, b| ccw_cmp(pivot, a, b));

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len());
    hull.extend_from_slice(&pts[..3]);
    for &p in &pts[3..] {
        while hull.len() >= 2
            && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}
