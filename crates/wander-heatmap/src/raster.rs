//! DDA segment traversal over a fixed grid.

use wander_core::Point;

use crate::bounds::GridBounds;

/// Increment every cell the segment `a → b` passes through, including both
/// endpoint cells.
///
/// Steps cell by cell along whichever axis crosses its next grid line
/// first; ties step along y. Cells outside `bounds` are skipped. The walk
/// is capped at `cols + rows + 2` cells in case rounding keeps the end cell
/// from being hit exactly.
pub(crate) fn rasterize_segment(a: Point, b: Point, bounds: &GridBounds, counts: &mut [u16]) {
    let cell = bounds.cell_size.get();
    let gx0 = (a.x - bounds.origin_x) / cell;
    let gy0 = (a.y - bounds.origin_y) / cell;
    let gx1 = (b.x - bounds.origin_x) / cell;
    let gy1 = (b.y - bounds.origin_y) / cell;
    if !(gx0.is_finite() && gy0.is_finite() && gx1.is_finite() && gy1.is_finite()) {
        return;
    }

    let mut bump = |cx: i64, cy: i64| {
        if let Some(idx) = bounds.index(cx, cy) {
            counts[idx] = counts[idx].saturating_add(1);
        }
    };

    let dx = (gx1 - gx0).abs();
    let dy = (gy1 - gy0).abs();
    let mut cx = gx0.floor() as i64;
    let mut cy = gy0.floor() as i64;
    let end_cx = gx1.floor() as i64;
    let end_cy = gy1.floor() as i64;

    if dx == 0.0 && dy == 0.0 {
        bump(cx, cy);
        return;
    }

    let sx: i64 = if gx1 > gx0 { 1 } else { -1 };
    let sy: i64 = if gy1 > gy0 { 1 } else { -1 };

    let mut t_max_x = if dx == 0.0 {
        f64::INFINITY
    } else if sx > 0 {
        (gx0.floor() + 1.0 - gx0) / dx
    } else {
        (gx0 - gx0.floor()) / dx
    };
    let mut t_max_y = if dy == 0.0 {
        f64::INFINITY
    } else if sy > 0 {
        (gy0.floor() + 1.0 - gy0) / dy
    } else {
        (gy0 - gy0.floor()) / dy
    };
    let t_delta_x = if dx == 0.0 { f64::INFINITY } else { 1.0 / dx };
    let t_delta_y = if dy == 0.0 { f64::INFINITY } else { 1.0 / dy };

    let max_steps = bounds.cols + bounds.rows + 2;
    for _ in 0..max_steps {
        bump(cx, cy);
        if cx == end_cx && cy == end_cy {
            break;
        }
        if t_max_x < t_max_y {
            cx = cx.saturating_add(sx);
            t_max_x += t_delta_x;
        } else {
            cy = cy.saturating_add(sy);
            t_max_y += t_delta_y;
        }
    }
}
