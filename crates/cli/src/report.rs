//! JSON reports for the `hull` and `compare` commands.

use hull2d::geom::signed_area;
use hull2d::prelude::*;
use serde::Serialize;

/// One hull: `{"algo", "input_count", "hull": [[x, y], ...]}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HullReport {
    pub algo: &'static str,
    pub input_count: usize,
    pub hull: Vec<[f64; 2]>,
}

impl HullReport {
    pub fn build(algo: Algorithm, points: &[Point]) -> Result<Self, HullError> {
        let hull = convex_hull(points, algo)?;
        Ok(Self {
            algo: algo.name(),
            input_count: points.len(),
            hull: hull.iter().map(|p| [p.x, p.y]).collect(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.hull.len()
    }

    /// Area enclosed by the hull (positive, since vertices run CCW).
    pub fn area(&self) -> f64 {
        let poly: Vec<Point> = self.hull.iter().map(|&[x, y]| Point::new(x, y)).collect();
        signed_area(&poly)
    }
}

/// All four algorithms on one point set.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompareReport {
    pub input_count: usize,
    /// Every hull equals the first one as a cyclic sequence.
    pub agree: bool,
    pub counts: Vec<AlgoCount>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AlgoCount {
    pub algo: &'static str,
    pub count: usize,
}

impl CompareReport {
    pub fn build(points: &[Point]) -> Result<Self, HullError> {
        validate_points(points)?;
        let hulls: Vec<(Algorithm, Vec<Point>)> = Algorithm::ALL
            .into_iter()
            .map(|algo| (algo, algo.run(points)))
            .collect();
        Ok(Self::from_hulls(points.len(), &hulls))
    }

    pub fn from_hulls(input_count: usize, hulls: &[(Algorithm, Vec<Point>)]) -> Self {
        let agree = match hulls.first() {
            Some((_, reference)) => hulls.iter().all(|(_, h)| same_cycle(h, reference)),
            None => true,
        };
        Self {
            input_count,
            agree,
            counts: hulls
                .iter()
                .map(|(algo, hull)| AlgoCount {
                    algo: algo.name(),
                    count: hull.len(),
                })
                .collect(),
        }
    }
}
