// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_quadtree::{Point2D, QuadTree, Rect2D};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn coord(&mut self, max: i64) -> i64 {
        (self.next_u64() % (max as u64 + 1)) as i64
    }
}

fn gen_random_points(count: usize, max: i64, seed: u64) -> Vec<Point2D<i64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(seed);
    for _ in 0..count {
        out.push(Point2D::new(rng.coord(max), rng.coord(max)));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: i64) -> Vec<Point2D<i64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.coord(2000 - spread), rng.coord(2000 - spread)));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            out.push(Point2D::new(cx + rng.coord(spread), cy + rng.coord(spread)));
        }
    }
    out
}

fn build_tree(points: &[Point2D<i64>], max: i64) -> QuadTree<i64, u32> {
    let mut qt = QuadTree::from_xywh(0, 0, max, max);
    for (i, p) in points.iter().copied().enumerate() {
        let _ = qt.insert(p, i as u32).unwrap();
    }
    qt
}

fn bench_query_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_random");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_random_points(n, 10_000, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pruned_n{}", n), |b| {
            b.iter_batched(
                || build_tree(&points, 10_000),
                |mut qt| {
                    let hits = qt.query_range(Rect2D::from_xywh(2_000, 2_000, 1_000, 1_000));
                    black_box(hits.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("unpruned_n{}", n), |b| {
            b.iter_batched(
                || build_tree(&points, 10_000),
                |mut qt| {
                    let hits =
                        qt.query_range_unpruned(Rect2D::from_xywh(2_000, 2_000, 1_000, 1_000));
                    black_box(hits.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_clustered");
    let points = gen_clustered_points(16, 256, 128);
    group.bench_function("pruned_many_rects", |b| {
        b.iter_batched(
            || build_tree(&points, 2_000),
            |mut qt| {
                let mut total = 0usize;
                for q in 0..64_i64 {
                    let x = (q % 8) * 250;
                    let y = (q / 8) * 250;
                    total += qt.query_range(Rect2D::from_xywh(x, y, 250, 250)).len();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let points = gen_random_points(10_000, 10_000, 0xBADC_F00D_1234_5678);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("insert_random_10k", |b| {
        b.iter_batched(
            || QuadTree::<i64, u32>::from_xywh(0, 0, 10_000, 10_000),
            |mut qt| {
                for (i, p) in points.iter().copied().enumerate() {
                    let _ = qt.insert(p, i as u32).unwrap();
                }
                black_box(qt.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_query_random,
    bench_query_clustered,
    bench_insert
);
criterion_main!(benches);
