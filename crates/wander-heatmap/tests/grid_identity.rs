//! Incremental extension must reproduce a from-scratch grid exactly.
//!
//! Covers generated walks of every model and arbitrary-jump point clouds,
//! for arbitrary split points and multi-stage extension chains.

use proptest::prelude::*;
use wander_core::{WalkParams, WalkType};
use wander_heatmap::{compute_heatmap_grid, extend_heatmap_grid, CellSize};
use wander_test_utils::jump_cloud;
use wander_walk::generate_walk;

fn arb_walk_type() -> impl Strategy<Value = WalkType> {
    prop_oneof![
        Just(WalkType::Isotropic),
        Just(WalkType::Lattice),
        Just(WalkType::Levy),
        Just(WalkType::SelfAvoiding),
    ]
}

proptest! {
    #[test]
    fn extend_equals_recompute_for_generated_walks(
        seed in any::<u32>(),
        walk_type in arb_walk_type(),
        steps in 1usize..400,
        cell in 2u32..12,
        a_frac in 0.0f64..1.0,
        b_frac in 0.0f64..1.0,
    ) {
        let walk = generate_walk(&WalkParams::new(seed, steps, 1.0, walk_type)).unwrap();
        let cell = CellSize::new(f64::from(cell)).unwrap();
        let n = walk.steps();
        let (lo, hi) = if a_frac <= b_frac { (a_frac, b_frac) } else { (b_frac, a_frac) };
        let a = (lo * n as f64) as usize;
        let b = (hi * n as f64) as usize;

        let mut grid = compute_heatmap_grid(&walk, cell, a);
        extend_heatmap_grid(&mut grid, &walk, a, b);
        let full = compute_heatmap_grid(&walk, cell, b);

        prop_assert_eq!(grid.counts(), full.counts());
        prop_assert_eq!(grid.max_count(), full.max_count());
        prop_assert_eq!(grid.bounds(), full.bounds());
    }

    #[test]
    fn extend_equals_recompute_for_jump_clouds(
        seed in any::<u64>(),
        n in 1usize..120,
        cell in 0.25f64..4.0,
        split in 0usize..120,
    ) {
        let walk = jump_cloud(seed, n, 30.0);
        let cell = CellSize::new(cell).unwrap();
        let split = split.min(n);

        let mut grid = compute_heatmap_grid(&walk, cell, split);
        extend_heatmap_grid(&mut grid, &walk, split, n);
        let full = compute_heatmap_grid(&walk, cell, n);
        prop_assert_eq!(grid, full);
    }

    #[test]
    fn chained_extension_equals_recompute(
        seed in any::<u32>(),
        cuts in prop::collection::vec(0usize..300, 1..8),
    ) {
        let walk = generate_walk(&WalkParams::new(seed, 300, 2.0, WalkType::Isotropic)).unwrap();
        let cell = CellSize::new(4.0).unwrap();
        let mut cuts = cuts;
        cuts.sort_unstable();

        let mut grid = compute_heatmap_grid(&walk, cell, 0);
        let mut last = 0;
        for &c in &cuts {
            extend_heatmap_grid(&mut grid, &walk, last, c);
            last = c;
        }
        let full = compute_heatmap_grid(&walk, cell, last);
        prop_assert_eq!(grid, full);
    }

    #[test]
    fn max_count_is_grid_maximum(seed in any::<u64>(), n in 0usize..80) {
        let walk = jump_cloud(seed, n, 10.0);
        let grid = compute_heatmap_grid(&walk, CellSize::new(1.0).unwrap(), n);
        let max = grid.counts().iter().copied().max().unwrap_or(0);
        prop_assert_eq!(grid.max_count(), max);
    }
}

#[test]
fn every_segment_touches_at_least_one_cell() {
    // Each segment increments at least its start cell, and segments of a
    // walk never leave the grid, so visits >= steps.
    let walk = generate_walk(&WalkParams::new(7, 1000, 1.0, WalkType::Isotropic)).unwrap();
    let grid = compute_heatmap_grid(&walk, CellSize::new(3.0).unwrap(), 1000);
    assert!(grid.total_visits() >= 1000);
}
