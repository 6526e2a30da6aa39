//! Dense visit-count grid.

use wander_core::Point;

use crate::bounds::{CellSize, GridBounds};
use crate::raster::rasterize_segment;

/// Per-cell visit counts over fixed [`GridBounds`].
///
/// Invariant: [`max_count`](Self::max_count) equals the largest value in
/// [`counts`](Self::counts). Counts saturate at `u16::MAX`.
#[derive(Clone, Debug, PartialEq)]
pub struct VisitationGrid {
    counts: Vec<u16>,
    bounds: GridBounds,
    max_count: u16,
}

impl VisitationGrid {
    /// An all-zero grid.
    pub fn zeroed(bounds: GridBounds) -> Self {
        Self {
            counts: vec![0; bounds.cell_count()],
            bounds,
            max_count: 0,
        }
    }

    /// Grid geometry.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Row-major counts, `rows() * cols()` long.
    pub fn counts(&self) -> &[u16] {
        &self.counts
    }

    /// Largest count in the grid.
    pub fn max_count(&self) -> u16 {
        self.max_count
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// World x of the grid's left edge.
    pub fn origin_x(&self) -> f64 {
        self.bounds.origin_x
    }

    /// World y of the grid's bottom edge.
    pub fn origin_y(&self) -> f64 {
        self.bounds.origin_y
    }

    /// Cell edge length.
    pub fn cell_size(&self) -> CellSize {
        self.bounds.cell_size
    }

    /// Count at `(col, row)`, or `None` outside the grid.
    pub fn count(&self, col: usize, row: usize) -> Option<u16> {
        if col < self.cols() && row < self.rows() {
            Some(self.counts[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Count at `(col, row)` divided by [`max_count`](Self::max_count);
    /// `0.0` on an empty grid.
    pub fn normalized(&self, col: usize, row: usize) -> Option<f64> {
        let c = self.count(col, row)?;
        if self.max_count == 0 {
            return Some(0.0);
        }
        Some(f64::from(c) / f64::from(self.max_count))
    }

    /// The `(col, row)` containing `p`.
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        self.bounds.cell_of(p)
    }

    /// Sum of all counts.
    pub fn total_visits(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Rasterize segments `i → i+1` for `i` in `[from, min(to, len - 1))`.
    /// Leaves `max_count` stale; callers follow up with
    /// [`refresh_max_count`](Self::refresh_max_count).
    pub(crate) fn rasterize_segments(&mut self, points: &[Point], from: usize, to: usize) {
        let end = to.min(points.len().saturating_sub(1));
        for i in from..end {
            rasterize_segment(points[i], points[i + 1], &self.bounds, &mut self.counts);
        }
    }

    /// Rescan the whole grid for its maximum.
    pub(crate) fn refresh_max_count(&mut self) -> u16 {
        self.max_count = self.counts.iter().copied().max().unwrap_or(0);
        self.max_count
    }
}
