//! Criterion micro-benchmarks for walk generation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wander_bench::{ensemble, reference_params, stress_params};
use wander_core::WalkType;
use wander_walk::{generate_walk, Mulberry32};

/// Benchmark: 10K raw draws from the PRNG.
fn bench_mulberry32_10k(c: &mut Criterion) {
    c.bench_function("mulberry32_10k", |b| {
        b.iter(|| {
            let mut rng = Mulberry32::new(black_box(42));
            let mut acc = 0.0;
            for _ in 0..10_000 {
                acc += rng.next_f64();
            }
            black_box(acc)
        });
    });
}

/// Benchmark: generate one 5000-step walk of every model.
fn bench_generate_stress(c: &mut Criterion) {
    for walk_type in WalkType::ALL {
        let params = stress_params(walk_type);
        c.bench_function(&format!("generate_5000_{}", walk_type.as_str()), |b| {
            b.iter(|| black_box(generate_walk(black_box(&params))));
        });
    }
}

/// Benchmark: fan out 100 isotropic walks of 500 steps.
fn bench_generate_ensemble_100(c: &mut Criterion) {
    let params = reference_params(WalkType::Isotropic);
    c.bench_function("generate_ensemble_100x500", |b| {
        b.iter(|| black_box(ensemble(&params, 100)));
    });
}

criterion_group!(
    benches,
    bench_mulberry32_10k,
    bench_generate_stress,
    bench_generate_ensemble_100
);
criterion_main!(benches);
