//! Reusable fixture walks.
//!
//! - [`zigzag_walk`]: diagonal up/down teeth crossing many grid lines.
//! - [`jump_cloud`]: arbitrary jumps between seeded random points, for
//!   exercising the rasterizer on segments of every slope and length.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wander_core::Walk;

use crate::walk_from_points;

/// `(0,0) → (1,1) → (2,0) → (3,1) → …` for `n` steps.
pub fn zigzag_walk(n: usize) -> Walk {
    let pts: Vec<(f64, f64)> = (0..=n)
        .map(|i| (i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }))
        .collect();
    walk_from_points(&pts)
}

/// A walk starting at the origin followed by `n` uniformly random points
/// in `[-spread, spread)²`, deterministic in `seed`.
pub fn jump_cloud(seed: u64, n: usize, spread: f64) -> Walk {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pts = Vec::with_capacity(n + 1);
    pts.push((0.0, 0.0));
    for _ in 0..n {
        let x = rng.random_range(-spread..spread);
        let y = rng.random_range(-spread..spread);
        pts.push((x, y));
    }
    walk_from_points(&pts)
}
