use crate::geom::{farthest_from, lexicographic_cmp, orientation, Point};

/// QuickHull convex hull, CCW from the lexicographic minimum.
///
/// The extreme points `a` (minimum) and `b` (maximum) split the set along the
/// line `a–b`; each side is then refined recursively by [`hull_side`].
pub fn quickhull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return super::sorted_copy(points);
    }

    let (Some(&a), Some(&b)) = (
        points.iter().min_by(|p, q| lexicographic_cmp(p, q)),
        points.iter().max_by(|p, q| lexicographic_cmp(p, q)),
    ) else {
        return Vec::new();
    };

    // Points on the line `a–b` (including `a` and `b`) are in neither half.
    let below = outside(points, a, b);
    let above = outside(points, b, a);

    let mut hull = Vec::with_capacity(below.len() + above.len() + 2);
    hull.push(a);
    hull.extend(hull_side(&below, a, b));
    hull.push(b);
    hull.extend(hull_side(&above, b, a));
    hull
}

/// Hull vertices strictly between `p` and `q`, in CCW order, among `points`.
///
/// Every point of `points` must lie outside the directed segment `p → q`
/// (strictly to its right, since CCW traversal keeps the interior on the left).
fn hull_side(points: &[Point], p: Point, q: Point) -> Vec<Point> {
    let Some(i) = farthest_from(p, q, points) else {
        return Vec::new();
    };
    let f = points[i];

    let mut fragment = hull_side(&outside(points, p, f), p, f);
    fragment.push(f);
    fragment.extend(hull_side(&outside(points, f, q), f, q));
    fragment
}

/// Points strictly right of the directed segment `p → q`.
fn outside(points: &[Point], p: Point, q: Point) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&x| orientation(p, q, x) < 0.0)
        .collect()
}
