//! Streaming statistics over one walk's visible prefix.

use wander_core::Walk;

/// Statistics of one walk at one cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScalarStats {
    /// Cursor position the stats were computed for.
    pub current_step: usize,
    /// Steps in the whole walk.
    pub total_steps: usize,
    /// `|point[min(current_step, last)]|`.
    pub distance_from_origin: f64,
    /// Largest `|point[i]|` seen over the visible prefix.
    pub max_distance: f64,
    /// Sum of segment lengths over the visible prefix.
    pub total_path_length: f64,
}

/// Incremental path-length / max-distance accumulator for a single walk.
///
/// Forward cursor motion only visits the new segments. Backward motion
/// resets to zero and re-accumulates from step 0.
#[derive(Clone, Debug, Default)]
pub struct StatsAccumulator {
    last_step: usize,
    max_distance: f64,
    total_path_length: f64,
}

impl StatsAccumulator {
    /// A fresh accumulator at step 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all accumulated state.
    pub fn reset(&mut self) {
        self.last_step = 0;
        self.max_distance = 0.0;
        self.total_path_length = 0.0;
    }

    /// Cursor position of the last [`compute`](Self::compute).
    pub fn last_step(&self) -> usize {
        self.last_step
    }

    /// Statistics of `walk` with `current_step` steps visible.
    ///
    /// A cursor past the end of the walk is clamped to its final point.
    pub fn compute(&mut self, walk: &Walk, current_step: usize) -> ScalarStats {
        if current_step < self.last_step {
            tracing::debug!(
                from = self.last_step,
                to = current_step,
                "scalar stats re-baselined"
            );
            self.reset();
        }

        let points = walk.points();
        let end = current_step.min(walk.steps());
        for i in self.last_step..end {
            self.total_path_length += points[i].distance(points[i + 1]);
            self.max_distance = self.max_distance.max(points[i + 1].norm());
        }
        self.last_step = current_step;

        ScalarStats {
            current_step,
            total_steps: walk.params().steps,
            distance_from_origin: walk.point_at(current_step).norm(),
            max_distance: self.max_distance,
            total_path_length: self.total_path_length,
        }
    }
}
