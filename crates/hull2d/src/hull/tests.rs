use super::*;
use crate::error::UnknownAlgorithm;
use crate::geom::rand::{draw_on_circle, draw_uniform, PointCloudCfg, ReplayToken};
use crate::geom::{contains_eps, is_strictly_convex, same_cycle};
use nalgebra::point;
use proptest::prelude::*;

fn each_algorithm(points: &[Point], expected: &[Point]) {
    for algo in Algorithm::ALL {
        assert_eq!(algo.run(points), expected, "{algo}");
    }
}

#[test]
fn triangle() {
    let points = vec![point![0.0, 0.0], point![4.0, 0.0], point![0.0, 4.0]];
    each_algorithm(&points, &points);
}

#[test]
fn triangle_given_clockwise() {
    let points = vec![point![0.0, 4.0], point![4.0, 0.0], point![0.0, 0.0]];
    let expected = [point![0.0, 0.0], point![4.0, 0.0], point![0.0, 4.0]];
    each_algorithm(&points, &expected);
}

#[test]
fn square_drops_interior_point() {
    let points = vec![
        point![0.0, 0.0],
        point![4.0, 0.0],
        point![4.0, 4.0],
        point![0.0, 4.0],
        point![2.0, 2.0],
    ];
    let expected = [
        point![0.0, 0.0],
        point![4.0, 0.0],
        point![4.0, 4.0],
        point![0.0, 4.0],
    ];
    each_algorithm(&points, &expected);
}

#[test]
fn diamond_with_interior_points() {
    let points = vec![
        point![0.0, 10.0],
        point![1.0, 1.0],
        point![10.0, 0.5],
        point![1.0, -1.0],
        point![0.5, -10.0],
        point![-1.0, -1.0],
        point![-10.0, 0.0],
        point![-1.0, 1.5],
    ];
    let expected = [
        point![-10.0, 0.0],
        point![0.5, -10.0],
        point![10.0, 0.5],
        point![0.0, 10.0],
    ];
    each_algorithm(&points, &expected);
}

#[test]
fn far_point_is_on_every_hull() {
    let mut points: Vec<Point> = (0..6)
        .map(|k| {
            let th = k as f64 * std::f64::consts::TAU / 6.0 + 0.1;
            point![th.cos(), th.sin()]
        })
        .collect();
    let far = point![100.0, 3.0];
    points.push(far);
    for algo in Algorithm::ALL {
        let hull = algo.run(&points);
        assert!(hull.contains(&far), "{algo}");
        assert!(is_strictly_convex(&hull), "{algo}");
    }
}

#[test]
fn small_inputs_come_back_sorted() {
    let two = [point![3.0, 1.0], point![-1.0, 2.0]];
    for algo in Algorithm::ALL {
        assert_eq!(algo.run(&two), vec![two[1], two[0]], "{algo}");
        assert!(algo.run(&[]).is_empty(), "{algo}");
    }
}

#[test]
fn checked_hull_rejects_bad_input() {
    let collinear = [point![0.0, 0.0], point![1.0, 0.0], point![2.0, 0.0]];
    for algo in Algorithm::ALL {
        assert_eq!(
            convex_hull(&collinear, algo),
            Err(HullError::DegenerateInput(3))
        );
        assert_eq!(
            convex_hull(&collinear[..1], algo),
            Err(HullError::InsufficientPoints(1))
        );
    }
    let tri = [point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]];
    assert_eq!(convex_hull(&tri, Algorithm::QuickHull), Ok(tri.to_vec()));
}

#[test]
fn algorithm_names_round_trip() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        assert_eq!(algo.to_string(), algo.name());
    }
    assert_eq!("Graham".parse::<Algorithm>(), Ok(Algorithm::GrahamScan));
    assert_eq!(
        "gift_wrapping".parse::<Algorithm>(),
        Ok(Algorithm::GiftWrapping)
    );
    assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::QuickHull));
    let err = "bogo".parse::<Algorithm>().unwrap_err();
    assert_eq!(err, UnknownAlgorithm("bogo".to_string()));
    assert!(err.to_string().starts_with("unknown hull algorithm `bogo`"));
}

#[test]
fn default_cloud_all_agree() {
    let points = draw_uniform(PointCloudCfg::default(), ReplayToken::new(2025));
    let reference = monotone_chain(&points);
    assert!(reference.len() >= 3);
    for algo in Algorithm::ALL {
        assert_eq!(algo.run(&points), reference, "{algo}");
    }
}

#[test]
fn circle_points_are_all_vertices() {
    let points = draw_on_circle(50, 10.0, ReplayToken::new(3));
    for algo in Algorithm::ALL {
        let hull = algo.run(&points);
        assert_eq!(hull.len(), points.len(), "{algo}");
        assert!(is_strictly_convex(&hull), "{algo}");
    }
}

proptest! {
    #[test]
    fn hull_properties(seed in any::<u64>(), count in 3usize..80) {
        let cfg = PointCloudCfg { count, ..PointCloudCfg::default() };
        let points = draw_uniform(cfg, ReplayToken::new(seed));
        prop_assume!(validate_points(&points).is_ok());

        let reference = monotone_chain(&points);
        for algo in Algorithm::ALL {
            let hull = algo.run(&points);
            prop_assert!(is_strictly_convex(&hull), "{} not convex", algo);
            for &p in &points {
                prop_assert!(contains_eps(&hull, p, 1e-6), "{} misses {:?}", algo, p);
            }
            prop_assert!(hull.iter().all(|v| points.contains(v)));
            prop_assert!(same_cycle(&hull, &reference), "{} disagrees", algo);
            // A convex polygon is its own hull.
            prop_assert_eq!(algo.run(&hull), hull);
        }
    }

    #[test]
    fn three_points_hull_is_input(seed in any::<u64>()) {
        let cfg = PointCloudCfg { count: 3, ..PointCloudCfg::default() };
        let points = draw_uniform(cfg, ReplayToken::new(seed));
        prop_assume!(validate_points(&points).is_ok());
        for algo in Algorithm::ALL {
            let hull = algo.run(&points);
            prop_assert_eq!(hull.len(), 3);
            prop_assert!(points.iter().all(|p| hull.contains(p)));
            prop_assert!(is_strictly_convex(&hull));
        }
    }
}
