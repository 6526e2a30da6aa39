//! Generated walks.

use crate::error::ParamError;
use crate::params::WalkParams;
use crate::point::Point;

/// One realization of a random walk.
///
/// Immutable once built: regenerating produces a new `Walk`. The invariant
/// `points().len() == params().steps + 1` always holds; point 0 is the
/// origin for every generated walk.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk {
    params: WalkParams,
    points: Vec<Point>,
}

impl Walk {
    /// Build a walk from an explicit point sequence.
    ///
    /// `params.steps` is overwritten with `points.len() - 1` so that the
    /// length invariant holds. Used by generators that terminate early and
    /// by tests that need hand-crafted paths.
    ///
    /// Returns `Err(ParamError::EmptyWalk)` if `points` is empty.
    pub fn from_points(mut params: WalkParams, points: Vec<Point>) -> Result<Self, ParamError> {
        if points.is_empty() {
            return Err(ParamError::EmptyWalk);
        }
        params.steps = points.len() - 1;
        Ok(Self { params, points })
    }

    /// Parameters this walk was generated from, with `steps` reflecting
    /// the number of steps actually taken.
    pub fn params(&self) -> &WalkParams {
        &self.params
    }

    /// Every point, origin first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of steps taken, which is also the index of the final point.
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// The point at `step`, clamped to the final point.
    pub fn point_at(&self, step: usize) -> Point {
        self.points[step.min(self.steps())]
    }

    /// The point at `step`, or `None` if the walk never reached it.
    pub fn get(&self, step: usize) -> Option<Point> {
        self.points.get(step).copied()
    }

    /// Length of segment `i → i+1`, or `None` past the end.
    pub fn segment_length(&self, i: usize) -> Option<f64> {
        let a = self.points.get(i)?;
        let b = self.points.get(i.checked_add(1)?)?;
        Some(a.distance(*b))
    }
}
