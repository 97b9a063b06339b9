use std::cmp::Ordering;

use super::Point;

/// z-component of `(b - a) × (c - a)`.
///
/// - `> 0`: `c` is counterclockwise of `a → b` (left turn)
/// - `< 0`: clockwise (right turn)
/// - `== 0`: collinear
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// `true` if `a` comes before `b` in `(x, y)` lexicographic order.
#[inline]
pub fn is_left_of(a: Point, b: Point) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Compares two points first by `x`, then by `y`.
///
/// Same order as [`is_left_of`], shaped for `sort_by`/`min_by`. NaN compares equal.
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Counterclockwise angular order around `pivot`: `a` precedes `b` when `b` is
/// counterclockwise of `pivot → a`.
///
/// Only a total order when every point lies in one open half-plane seen from
/// `pivot`, which holds when `pivot` is the lexicographic minimum. Points
/// collinear with the pivot are ordered nearest first.
///
/// Antisymmetric for any input, but transitivity rests on float orientation
/// signs: near-collinear triples can break it, and `sort_by` may then panic.
/// Validated general-position input does not hit this.
#[inline]
pub fn ccw_cmp(pivot: Point, a: &Point, b: &Point) -> Ordering {
    let o = orientation(pivot, *a, *b);
    if o > 0.0 {
        Ordering::Less
    } else if o < 0.0 {
        Ordering::Greater
    } else {
        let da = (*a - pivot).norm_squared();
        let db = (*b - pivot).norm_squared();
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    }
}

/// Unsigned distance of `p` from the infinite line through `a` and `b`.
///
/// Not finite when `a == b`.
#[inline]
pub fn distance_to_line(a: Point, b: Point, p: Point) -> f64 {
    orientation(a, b, p).abs() / (b - a).norm()
}

/// Index of the point farthest from the line through `a` and `b`.
///
/// Ties go to the first such point; `None` for an empty slice.
pub fn farthest_from(a: Point, b: Point, points: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in points.iter().enumerate() {
        let d = distance_to_line(a, b, p);
        if best.is_none_or(|(_, best_d)| d > best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
