//! Criterion micro-benchmarks for visitation-grid maintenance.
//!
//! Compares per-frame full recomputation against incremental extension
//! over a full playback of one walk.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wander_bench::{ensemble, reference_params, stress_params};
use wander_core::WalkType;
use wander_heatmap::{
    compute_heatmap_grid, compute_multi_walk_heatmap_grid, extend_heatmap_grid, CellSize,
};

const FRAME_STEPS: usize = 5;

/// Benchmark: recompute the grid from scratch on every frame.
fn bench_playback_recompute(c: &mut Criterion) {
    let walk = &ensemble(&stress_params(WalkType::Isotropic), 1)[0];
    let cell = CellSize::new(10.0).unwrap();

    c.bench_function("heatmap_playback_recompute_5000", |b| {
        b.iter(|| {
            let mut step = 0;
            while step < walk.steps() {
                step = (step + FRAME_STEPS).min(walk.steps());
                black_box(compute_heatmap_grid(walk, cell, step));
            }
        });
    });
}

/// Benchmark: extend one grid frame by frame.
fn bench_playback_extend(c: &mut Criterion) {
    let walk = &ensemble(&stress_params(WalkType::Isotropic), 1)[0];
    let cell = CellSize::new(10.0).unwrap();

    c.bench_function("heatmap_playback_extend_5000", |b| {
        b.iter(|| {
            let mut grid = compute_heatmap_grid(walk, cell, 0);
            let mut step = 0;
            while step < walk.steps() {
                let next = (step + FRAME_STEPS).min(walk.steps());
                extend_heatmap_grid(&mut grid, walk, step, next);
                step = next;
            }
            black_box(grid)
        });
    });
}

/// Benchmark: one all-walks grid over 100 walks.
fn bench_multi_walk_100(c: &mut Criterion) {
    let walks = ensemble(&reference_params(WalkType::Lattice), 100);
    let cell = CellSize::new(10.0).unwrap();

    c.bench_function("heatmap_multi_walk_100x500", |b| {
        b.iter(|| black_box(compute_multi_walk_heatmap_grid(&walks, cell, 500)));
    });
}

criterion_group!(
    benches,
    bench_playback_recompute,
    bench_playback_extend,
    bench_multi_walk_100
);
criterion_main!(benches);
