//! Benchmark profiles for the Wander random-walk simulator.
//!
//! - [`reference_params`]: the interactive default size (500 steps).
//! - [`stress_params`]: the largest size the front end allows (5000 steps).
//! - [`ensemble`]: a fanned-out walk set for multi-walk benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wander_core::{Walk, WalkParams, WalkType};
use wander_walk::generate_walks;

/// Seed shared by every profile.
pub const BENCH_SEED: u32 = 42;

/// 500 steps of length 5, the interactive default.
pub fn reference_params(walk_type: WalkType) -> WalkParams {
    WalkParams::new(BENCH_SEED, 500, 5.0, walk_type)
}

/// 5000 steps of length 5.
pub fn stress_params(walk_type: WalkType) -> WalkParams {
    WalkParams::new(BENCH_SEED, 5000, 5.0, walk_type)
}

/// `count` walks fanned out from `params`.
///
/// # Panics
///
/// Panics if `params` fails validation; profiles are always valid.
pub fn ensemble(params: &WalkParams, count: usize) -> Vec<Walk> {
    generate_walks(params, count).expect("benchmark profiles are valid")
}
