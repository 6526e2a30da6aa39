//! Criterion micro-benchmarks for the streaming accumulators and a full
//! session playback.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wander_analytics::{EnsembleAccumulator, StatsAccumulator};
use wander_bench::{ensemble, reference_params, stress_params};
use wander_core::WalkType;
use wander_session::{HeatmapConfig, Session, SessionConfig};

/// Benchmark: ensemble analytics over 20 walks at the final step.
fn bench_ensemble_20x5000(c: &mut Criterion) {
    let walks = ensemble(&stress_params(WalkType::Levy), 20);

    c.bench_function("ensemble_20x5000", |b| {
        b.iter(|| {
            let mut acc = EnsembleAccumulator::new();
            black_box(acc.compute(&walks, 5000).unwrap())
        });
    });
}

/// Benchmark: scalar stats streamed over a full 5000-step playback.
fn bench_scalar_playback(c: &mut Criterion) {
    let walk = &ensemble(&stress_params(WalkType::Isotropic), 1)[0];

    c.bench_function("scalar_playback_5000", |b| {
        b.iter(|| {
            let mut acc = StatsAccumulator::new();
            for step in (0..=5000).step_by(5) {
                black_box(acc.compute(walk, step));
            }
        });
    });
}

/// Benchmark: play a 10-walk session with the heatmap on, start to finish.
fn bench_session_playback(c: &mut Criterion) {
    let config = SessionConfig {
        params: reference_params(WalkType::Isotropic),
        walk_count: 10,
        heatmap: HeatmapConfig {
            enabled: true,
            all_walks: false,
        },
        ..SessionConfig::default()
    };

    c.bench_function("session_playback_10x500", |b| {
        b.iter(|| {
            let mut session = Session::new(config.clone()).unwrap();
            session.play();
            while session.is_playing() {
                black_box(session.tick().unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_ensemble_20x5000,
    bench_scalar_playback,
    bench_session_playback
);
criterion_main!(benches);
