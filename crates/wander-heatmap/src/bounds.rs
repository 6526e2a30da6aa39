//! Grid geometry: cell size and world-space bounds.

use wander_core::Point;

use crate::error::HeatmapError;

/// Largest number of columns (and of rows) in any grid.
///
/// Heavy-tailed walks can span far more cells than fit in memory. Grids
/// wider than this keep a `MAX_GRID_DIM`-cell window around the walk's
/// first point; segments outside the window are skipped.
pub const MAX_GRID_DIM: usize = 2048;

/// A validated, finite, strictly positive cell edge length.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CellSize(f64);

impl CellSize {
    /// Validate and wrap a cell size.
    pub fn new(value: f64) -> Result<Self, HeatmapError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(HeatmapError::InvalidCellSize { value });
        }
        Ok(Self(value))
    }

    /// The raw edge length.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CellSize {
    type Error = HeatmapError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Placement of a `cols × rows` grid of square cells in world space.
///
/// Cell `(i, j)` covers
/// `[origin_x + i·cell, origin_x + (i+1)·cell) × [origin_y + j·cell, origin_y + (j+1)·cell)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBounds {
    /// World x of the left edge of column 0.
    pub origin_x: f64,
    /// World y of the bottom edge of row 0.
    pub origin_y: f64,
    /// Cell edge length.
    pub cell_size: CellSize,
    /// Number of columns, in `1..=MAX_GRID_DIM`.
    pub cols: usize,
    /// Number of rows, in `1..=MAX_GRID_DIM`.
    pub rows: usize,
}

impl GridBounds {
    /// Explicit geometry. `cols` and `rows` are clamped to `1..=MAX_GRID_DIM`.
    pub fn new(origin_x: f64, origin_y: f64, cell_size: CellSize, cols: usize, rows: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
            cols: cols.clamp(1, MAX_GRID_DIM),
            rows: rows.clamp(1, MAX_GRID_DIM),
        }
    }

    /// Bounding box of `points`, padded by one cell on every side.
    ///
    /// An empty point set is treated as the single point `(0, 0)`. An axis
    /// spanning more than [`MAX_GRID_DIM`] cells is cut to a window centred
    /// on the first point, kept inside the bounding box.
    pub fn from_points<'a, I>(points: I, cell_size: CellSize) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut anchor: Option<Point> = None;
        for p in points {
            anchor.get_or_insert(*p);
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x || min_y > max_y {
            min_x = 0.0;
            max_x = 0.0;
            min_y = 0.0;
            max_y = 0.0;
        }

        let cell = cell_size.get();
        let (min_x, max_x) = (min_x - cell, max_x + cell);
        let (min_y, max_y) = (min_y - cell, max_y + cell);
        let anchor = anchor
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .unwrap_or(Point::ORIGIN);
        let (origin_x, cols) = fit_axis(min_x, max_x, anchor.x, cell);
        let (origin_y, rows) = fit_axis(min_y, max_y, anchor.y, cell);

        Self::new(origin_x, origin_y, cell_size, cols, rows)
    }

    /// Total number of cells; saturates rather than overflowing for
    /// hand-built bounds with oversized fields.
    pub fn cell_count(&self) -> usize {
        self.cols.checked_mul(self.rows).unwrap_or(usize::MAX)
    }

    /// The `(col, row)` containing `p`, or `None` outside the grid.
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let gx = ((p.x - self.origin_x) / self.cell_size.get()).floor();
        let gy = ((p.y - self.origin_y) / self.cell_size.get()).floor();
        if gx >= 0.0 && gy >= 0.0 && gx < self.cols as f64 && gy < self.rows as f64 {
            Some((gx as usize, gy as usize))
        } else {
            None
        }
    }

    /// Row-major flat index of `(col, row)`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col >= 0 && row >= 0 && (col as u64) < self.cols as u64 && (row as u64) < self.rows as u64 {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }
}

/// Origin and cell count along one axis spanning `[min, max]`.
fn fit_axis(min: f64, max: f64, anchor: f64, cell: f64) -> (f64, usize) {
    // `as usize` saturates for huge or infinite spans.
    let n = ((max - min) / cell).ceil() as usize;
    if n <= MAX_GRID_DIM {
        return (min, n);
    }
    let window = MAX_GRID_DIM as f64 * cell;
    let origin = (anchor - window / 2.0).max(min).min(max - window);
    (origin, MAX_GRID_DIM)
}
