//! Criterion benchmarks for the four hull algorithms.
//! Focus sizes: n in {10, 100, 1000, 10000}.
//! - `uniform`: points uniform in a square (h ~ log n).
//! - `circle`: every point on the hull (h = n), worst case for gift wrapping.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::geom::rand::{draw_on_circle, draw_uniform, PointCloudCfg, ReplayToken};
use hull2d::Algorithm;

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    for &n in &[10usize, 100, 1000, 10000] {
        let cfg = PointCloudCfg {
            count: n,
            ..PointCloudCfg::default()
        };
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), n), &n, |b, _| {
                b.iter_batched(
                    || draw_uniform(cfg, ReplayToken::new(43)),
                    |pts| {
                        let _hull = algo.run(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    for &n in &[10usize, 100, 1000] {
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), n), &n, |b, &n| {
                b.iter_batched(
                    || draw_on_circle(n, 1.0, ReplayToken::new(44)),
                    |pts| {
                        let _hull = algo.run(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_uniform, bench_circle);
criterion_main!(benches);
