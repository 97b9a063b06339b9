use crate::error::HullError;

use super::{lexicographic_cmp, orientation, Point};

/// Reject point sets the hull algorithms do not support.
///
/// Checks run in order: size, finiteness, duplicates, collinearity. Collinear
/// points on the hull boundary are not detected.
pub fn validate_points(points: &[Point]) -> Result<(), HullError> {
    if points.len() < 3 {
        return Err(HullError::InsufficientPoints(points.len()));
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }

    // Sorted indices put coinciding points next to each other.
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| lexicographic_cmp(&points[i], &points[j]));
    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            let (first, second) = (w[0].min(w[1]), w[0].max(w[1]));
            return Err(HullError::DuplicatePoints { first, second });
        }
    }

    // No duplicates, so the extremes are distinct and span a line.
    let a = points[order[0]];
    let b = points[order[order.len() - 1]];
    if points.iter().all(|&p| orientation(a, b, p) == 0.0) {
        return Err(HullError::DegenerateInput(points.len()));
    }
    Ok(())
}
