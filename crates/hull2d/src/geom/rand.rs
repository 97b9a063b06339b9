//! Random point clouds in 2D (uniform square, circle) with replay tokens.
//!
//! Purpose
//! - Provide small, deterministic point sources for tests, benches and the CLI.
//!   Draws are reproducible from a `(seed, index)` replay token.
//!
//! Model
//! - `draw_uniform`: `count` points uniform in the square `[lo, hi]²`.
//! - `draw_on_circle`: `count` points on a circle at random angles. Every point
//!   is a hull vertex, the worst case for gift wrapping.

use nalgebra::point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Point;

/// Uniform cloud configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCloudCfg {
    pub count: usize,
    /// Lower coordinate bound (both axes).
    pub lo: f64,
    /// Upper coordinate bound (both axes). Swapped with `lo` if smaller.
    pub hi: f64,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            lo: -100.0,
            hi: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// The token for the next draw in the same sequence.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from the square `[lo, hi]²`.
///
/// A degenerate range (`lo == hi`) puts every point on the same spot.
pub fn draw_uniform(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = if cfg.lo <= cfg.hi {
        (cfg.lo, cfg.hi)
    } else {
        (cfg.hi, cfg.lo)
    };
    let span = hi - lo;
    (0..cfg.count)
        .map(|_| {
            let x = lo + rng.gen::<f64>() * span;
            let y = lo + rng.gen::<f64>() * span;
            point![x, y]
        })
        .collect()
}

/// Draw `count` points on the circle of `radius` around the origin.
pub fn draw_on_circle(count: usize, radius: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            point![th.cos() * radius, th.sin() * radius]
        })
        .collect()
}
