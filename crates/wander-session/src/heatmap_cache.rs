//! Cursor-driven visitation-grid cache.
//!
//! Grids cannot be un-rasterized, so the cache follows a two-state policy
//! on every cursor update:
//!
//! | mode | no grid | step < last | step > last | step == last |
//! |------|---------|-------------|-------------|--------------|
//! | primary walk | recompute | recompute | extend | keep |
//! | all walks (n > 1) | recompute | recompute | recompute | keep |

use wander_core::Walk;
use wander_heatmap::{
    compute_heatmap_grid, compute_multi_walk_heatmap_grid, extend_heatmap_grid, CellSize,
    VisitationGrid,
};

/// What [`HeatmapCache::update`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatmapUpdate {
    /// A fresh grid was built from step 0.
    Recomputed,
    /// New segments were rasterized into the existing grid.
    Extended,
    /// The cached grid already matched the cursor.
    Unchanged,
    /// No walks were supplied; the cache stays empty.
    Skipped,
}

/// Visitation grid kept in step with a moving cursor.
#[derive(Clone, Debug)]
pub struct HeatmapCache {
    cell_size: CellSize,
    all_walks: bool,
    grid: Option<VisitationGrid>,
    last_step: usize,
}

impl HeatmapCache {
    /// An empty cache for grids with `cell_size` cells.
    pub fn new(cell_size: CellSize, all_walks: bool) -> Self {
        Self {
            cell_size,
            all_walks,
            grid: None,
            last_step: 0,
        }
    }

    /// Drop the cached grid; the next update recomputes.
    pub fn invalidate(&mut self) {
        self.grid = None;
        self.last_step = 0;
    }

    /// Change the cell size and invalidate.
    pub fn set_cell_size(&mut self, cell_size: CellSize) {
        self.cell_size = cell_size;
        self.invalidate();
    }

    /// Switch between primary-walk and all-walks aggregation and invalidate.
    pub fn set_all_walks(&mut self, all_walks: bool) {
        self.all_walks = all_walks;
        self.invalidate();
    }

    /// Cell size of grids built by this cache.
    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Whether all-walks aggregation is requested.
    pub fn all_walks(&self) -> bool {
        self.all_walks
    }

    /// The cached grid, if any.
    pub fn grid(&self) -> Option<&VisitationGrid> {
        self.grid.as_ref()
    }

    /// Cursor position the cached grid reflects.
    pub fn last_step(&self) -> usize {
        self.last_step
    }

    /// Bring the grid up to `step` for `walks` (primary walk first).
    pub fn update(&mut self, walks: &[Walk], step: usize) -> HeatmapUpdate {
        let Some(primary) = walks.first() else {
            return HeatmapUpdate::Skipped;
        };

        if self.all_walks && walks.len() > 1 {
            if self.grid.is_some() && step == self.last_step {
                return HeatmapUpdate::Unchanged;
            }
            self.grid = Some(compute_multi_walk_heatmap_grid(walks, self.cell_size, step));
            self.last_step = step;
            return HeatmapUpdate::Recomputed;
        }

        match &mut self.grid {
            Some(grid) if step > self.last_step => {
                extend_heatmap_grid(grid, primary, self.last_step, step);
                self.last_step = step;
                HeatmapUpdate::Extended
            }
            Some(_) if step == self.last_step => HeatmapUpdate::Unchanged,
            slot => {
                if slot.is_some() {
                    tracing::debug!(
                        from = self.last_step,
                        to = step,
                        "heatmap rewound, recomputing"
                    );
                }
                *slot = Some(compute_heatmap_grid(primary, self.cell_size, step));
                self.last_step = step;
                HeatmapUpdate::Recomputed
            }
        }
    }
}
