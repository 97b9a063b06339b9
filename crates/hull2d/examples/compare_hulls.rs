//! Run all four hull algorithms on one random cloud and print the results.
//!
//! Usage:
//!   cargo run -p hull2d --example compare_hulls -- [seed]
//!
//! Draws 100 points uniform in [-100, 100]² and prints, per algorithm,
//! the hull point count followed by the hull points.

use hull2d::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let points = draw_uniform(PointCloudCfg::default(), ReplayToken::new(seed));

    for (i, algo) in Algorithm::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let hull = match convex_hull(&points, algo) {
            Ok(hull) => hull,
            Err(e) => {
                eprintln!("{algo}: {e}");
                continue;
            }
        };
        println!("{algo} point count: {}", hull.len());
        for p in &hull {
            println!("{}, {}", p.x, p.y);
        }
    }
}
