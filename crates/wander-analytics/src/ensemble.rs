//! Streaming analytics over a set of walks sharing one step cursor.

use wander_core::{Walk, WalkType};

use crate::error::AnalyticsError;
use crate::fit::diffusion_exponent;
use crate::histogram::{build_histogram, HistogramBin, HistogramScale};
use crate::msd::{compute_msd, MsdPoint};
use crate::theory::theoretical_exponent;

/// Bin count for both ensemble histograms.
pub const HISTOGRAM_BINS: usize = 30;

/// Ensemble result at one cursor position.
///
/// Plain data; recomputed in full on every
/// [`EnsembleAccumulator::compute`] call except for the step-length samples.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleAnalytics {
    /// Log-sampled mean-squared displacement curve.
    pub msd_curve: Vec<MsdPoint>,
    /// Fitted `α` in `MSD ∝ t^α`, when at least ten usable samples exist.
    pub diffusion_exponent: Option<f64>,
    /// Step lengths of the primary walk (log-binned for Lévy flights).
    pub step_length_histogram: Vec<HistogramBin>,
    /// Displacement of every walk at the cursor.
    pub end_distance_histogram: Vec<HistogramBin>,
    /// Model of the primary walk.
    pub walk_type: WalkType,
    /// Number of walks in the set.
    pub walk_count: usize,
    /// Lévy tail exponent of the primary walk, if it is a Lévy flight.
    pub levy_alpha: Option<f64>,
}

impl EnsembleAnalytics {
    /// Result with no curves or histograms, labelled with `primary`'s model.
    pub fn empty(primary: &Walk, walk_count: usize) -> Self {
        let params = primary.params();
        let levy_alpha = match params.walk_type {
            WalkType::Levy => Some(params.effective_levy_alpha()),
            _ => None,
        };
        Self {
            msd_curve: Vec::new(),
            diffusion_exponent: None,
            step_length_histogram: Vec::new(),
            end_distance_histogram: Vec::new(),
            walk_type: params.walk_type,
            walk_count,
            levy_alpha,
        }
    }

    /// Reference exponent for this walk model.
    pub fn theoretical_exponent(&self) -> Option<f64> {
        theoretical_exponent(self.walk_type, self.levy_alpha)
    }
}

/// Accumulates step lengths of the primary walk across cursor moves.
///
/// MSD and histograms are cheap relative to a frame and are rebuilt on
/// each call; only the step-length sample list grows incrementally.
#[derive(Clone, Debug, Default)]
pub struct EnsembleAccumulator {
    last_step: usize,
    step_lengths: Vec<f64>,
}

impl EnsembleAccumulator {
    /// A fresh accumulator at step 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop accumulated step lengths.
    pub fn reset(&mut self) {
        self.last_step = 0;
        self.step_lengths.clear();
    }

    /// Cursor position the step-length samples currently cover.
    pub fn last_step(&self) -> usize {
        self.last_step
    }

    /// Step lengths accumulated so far.
    pub fn step_lengths(&self) -> &[f64] {
        &self.step_lengths
    }

    /// Analytics of `walks` with `current_step` steps visible.
    ///
    /// `walks[0]` is the primary walk. Returns
    /// [`AnalyticsError::EmptyWalkSet`] if `walks` is empty.
    pub fn compute(
        &mut self,
        walks: &[Walk],
        current_step: usize,
    ) -> Result<EnsembleAnalytics, AnalyticsError> {
        let primary = walks.first().ok_or(AnalyticsError::EmptyWalkSet)?;
        let mut result = EnsembleAnalytics::empty(primary, walks.len());
        if current_step == 0 {
            return Ok(result);
        }

        if current_step < self.last_step {
            tracing::debug!(
                from = self.last_step,
                to = current_step,
                "ensemble step lengths re-baselined"
            );
            self.reset();
        }

        let end = current_step.min(primary.steps());
        if end > self.last_step {
            self.step_lengths
                .extend((self.last_step..end).filter_map(|i| primary.segment_length(i)));
            self.last_step = end;
        }

        result.msd_curve = compute_msd(walks, current_step);
        result.diffusion_exponent = diffusion_exponent(&result.msd_curve);

        let scale = match result.walk_type {
            WalkType::Levy => HistogramScale::Log,
            _ => HistogramScale::Linear,
        };
        result.step_length_histogram = scale.build(&self.step_lengths, HISTOGRAM_BINS);

        let end_distances: Vec<f64> = walks
            .iter()
            .map(|w| w.point_at(current_step).norm())
            .collect();
        result.end_distance_histogram = build_histogram(&end_distances, HISTOGRAM_BINS);

        Ok(result)
    }
}
