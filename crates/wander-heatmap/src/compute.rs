//! Full, incremental, and multi-walk grid computation.

use wander_core::Walk;

use crate::bounds::{CellSize, GridBounds};
use crate::grid::VisitationGrid;

/// Grid for `walk` with segments `[0, up_to_step)` rasterized.
///
/// Bounds come from every point of the walk, not just the visible prefix,
/// so later [`extend_heatmap_grid`] calls never need to resize.
pub fn compute_heatmap_grid(walk: &Walk, cell_size: CellSize, up_to_step: usize) -> VisitationGrid {
    let bounds = GridBounds::from_points(walk.points(), cell_size);
    let mut grid = VisitationGrid::zeroed(bounds);
    grid.rasterize_segments(walk.points(), 0, up_to_step);
    grid.refresh_max_count();
    tracing::trace!(
        up_to_step,
        cols = bounds.cols,
        rows = bounds.rows,
        max_count = grid.max_count(),
        "heatmap recomputed"
    );
    grid
}

/// Rasterize segments `[from_step, to_step)` of `walk` into `grid` in place
/// and rescan for the new maximum.
///
/// The grid's origin, cell size, and dimensions are kept as they are;
/// points falling outside them are skipped. Destructive: clone the grid
/// first to keep the previous state.
pub fn extend_heatmap_grid(grid: &mut VisitationGrid, walk: &Walk, from_step: usize, to_step: usize) {
    grid.rasterize_segments(walk.points(), from_step, to_step);
    grid.refresh_max_count();
    tracing::trace!(
        from_step,
        to_step,
        max_count = grid.max_count(),
        "heatmap extended"
    );
}

/// One grid aggregating segments `[0, up_to_step)` of every walk, sized
/// from the union of all their points.
pub fn compute_multi_walk_heatmap_grid(
    walks: &[Walk],
    cell_size: CellSize,
    up_to_step: usize,
) -> VisitationGrid {
    let bounds = GridBounds::from_points(walks.iter().flat_map(|w| w.points()), cell_size);
    let mut grid = VisitationGrid::zeroed(bounds);
    for walk in walks {
        grid.rasterize_segments(walk.points(), 0, up_to_step);
    }
    grid.refresh_max_count();
    tracing::trace!(
        walks = walks.len(),
        up_to_step,
        max_count = grid.max_count(),
        "multi-walk heatmap recomputed"
    );
    grid
}
