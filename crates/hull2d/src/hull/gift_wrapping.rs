use crate::geom::{is_left_of, orientation, Point};

/// Gift wrapping (Jarvis march) convex hull, CCW from the lexicographic minimum.
///
/// From each hull point `p`, every input point is scanned and the candidate
/// `q` is replaced whenever a point lies clockwise of `p → q`. The survivor
/// has all points on its left and becomes the next hull point. Stops when the
/// wrap returns to the start.
pub fn gift_wrapping(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return super::sorted_copy(points);
    }

    // Start with the leftmost point.
    let start = (1..points.len()).fold(0, |best, i| {
        if is_left_of(points[i], points[best]) {
            i
        } else {
            best
        }
    });

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(points[current]);

        let p = points[current];
        let mut next = 0;
        for i in 1..points.len() {
            // The current point is no baseline: take whatever comes next.
            if next == current || orientation(p, points[next], points[i]) < 0.0 {
                next = i;
            }
        }

        current = next;
        // A closing wrap visits each point at most once.
        if current == start || hull.len() == points.len() {
            break;
        }
    }
    hull
}
