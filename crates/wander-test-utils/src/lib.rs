//! Test utilities and fixture walks for Wander development.
//!
//! Hand-built walks ([`walk_from_points`], [`straight_walk`],
//! [`axis_walk`]) give exact expected values for analytics tests;
//! [`fixtures`] adds seeded random point clouds for grid stress tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{jump_cloud, zigzag_walk};

use wander_core::{Point, Walk, WalkParams, WalkType};

/// Build a walk of the given type from `(x, y)` pairs.
///
/// `steps` is derived from the point count; seed is 1, step length 1.
pub fn typed_walk_from_points(points: &[(f64, f64)], walk_type: WalkType) -> Walk {
    let pts = points.iter().copied().map(Point::from).collect();
    Walk::from_points(WalkParams::new(1, 0, 1.0, walk_type), pts)
        .expect("fixture walks need at least one point")
}

/// Build an isotropic-typed walk from `(x, y)` pairs.
pub fn walk_from_points(points: &[(f64, f64)]) -> Walk {
    typed_walk_from_points(points, WalkType::Isotropic)
}

/// Straight walk along +x: `(0,0) → (1,0) → … → (n,0)`.
pub fn straight_walk(n: usize) -> Walk {
    axis_walk(n, 1.0, 0.0)
}

/// Straight walk of `n` steps, each `(dx, dy)`.
pub fn axis_walk(n: usize, dx: f64, dy: f64) -> Walk {
    let pts: Vec<(f64, f64)> = (0..=n).map(|i| (i as f64 * dx, i as f64 * dy)).collect();
    walk_from_points(&pts)
}
