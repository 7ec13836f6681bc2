// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tessera_grid::{CellGrid, DEFAULT_GRID_SIZE, Viewport};

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
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        v as f32 / (1u32 << 24) as f32
    }
}

fn gen_random_points(count: usize, w: f32, h: f32) -> Vec<(f32, f32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (rng.next_f32() * w, rng.next_f32() * h))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, w: f32, h: f32) -> Vec<(f32, f32)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f32() * w, rng.next_f32() * h);
        for _ in 0..per_cluster {
            let dx = (rng.next_f32() - 0.5) * 300.0;
            let dy = (rng.next_f32() - 0.5) * 300.0;
            out.push(((cx + dx).clamp(0.0, w - 1.0), (cy + dy).clamp(0.0, h - 1.0)));
        }
    }
    out
}

fn build(points: &[(f32, f32)], w: i32, h: i32, cell: i32) -> CellGrid<u32> {
    let mut grid = CellGrid::new(w, h, cell);
    for (i, &(x, y)) in points.iter().enumerate() {
        grid.insert(x, y, i as u32);
    }
    grid
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_random_points(n, 20_000.0, 20_000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{n}"), |b| {
            b.iter_batched(
                || CellGrid::<u32>::with_default_cells(20_000, 20_000),
                |mut grid| {
                    for (i, &(x, y)) in points.iter().enumerate() {
                        grid.insert(x, y, i as u32);
                    }
                    black_box(grid.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_query");
    let points = gen_random_points(100_000, 20_000.0, 20_000.0);
    for &cell in &[100, 250, DEFAULT_GRID_SIZE, 1_000] {
        let grid = build(&points, 20_000, 20_000, cell);
        group.bench_function(format!("screen_viewport_cell{cell}"), |b| {
            b.iter(|| {
                let hits = grid.query(black_box(&Viewport::from_center_size(
                    10_000.0, 10_000.0, 1_920.0, 972.0,
                )));
                black_box(hits.len());
            });
        });
    }

    let clustered = gen_clustered_points(32, 2_000, 20_000.0, 20_000.0);
    let grid = build(&clustered, 20_000, 20_000, DEFAULT_GRID_SIZE);
    group.bench_function("clustered_pan_across", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for step in 0..64 {
                let cx = 1_000.0 + step as f32 * 280.0;
                total += grid
                    .query(&Viewport::from_center_size(cx, 10_000.0, 1_920.0, 972.0))
                    .len();
            }
            black_box(total);
        });
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_remove");
    let points = gen_random_points(10_000, 20_000.0, 20_000.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_all_random", |b| {
        b.iter_batched(
            || build(&points, 20_000, 20_000, DEFAULT_GRID_SIZE),
            |mut grid| {
                for (i, &(x, y)) in points.iter().enumerate() {
                    black_box(grid.remove(x, y, i as u32));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query, bench_remove);
criterion_main!(benches);
