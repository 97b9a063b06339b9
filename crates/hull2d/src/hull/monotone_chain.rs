use crate::geom::{lexicographic_cmp, orientation, Point};

/// Andrew's monotone chain convex hull, CCW from the lexicographic minimum.
pub fn monotone_chain(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return super::sorted_copy(points);
    }
    let mut pts = points.to_vec();
    pts.sort_by(lexicographic_cmp);

    let lower = half_hull(pts.iter());
    let upper = half_hull(pts.iter().rev());

    // Both chains hold both endpoints; keep them from `lower` only.
    let mut hull = lower;
    hull.extend_from_slice(&upper[1..upper.len() - 1]);
    hull
}

/// One monotone chain: keep only strict left turns along the given order.
fn half_hull<'a>(ordered: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for &p in ordered {
        while chain.len() >= 2
            && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
