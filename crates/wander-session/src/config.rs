//! Session configuration, input clamping, and error types.
//!
//! [`SessionConfig`] is the construction input for a [`Session`](crate::Session).
//! [`validate()`](SessionConfig::validate) checks every invariant the
//! session relies on so that playback itself never fails on bad input.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use wander_core::{ParamError, WalkParams};
use wander_heatmap::{CellSize, HeatmapError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SessionConfig::validate()`] and the session setters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Walk parameters are invalid.
    Params(ParamError),
    /// The derived heatmap cell size is invalid.
    Heatmap(HeatmapError),
    /// A session needs at least one walk.
    ZeroWalkCount,
    /// Playback must advance by at least one step per tick.
    ZeroDrawSpeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params(e) => write!(f, "walk params: {e}"),
            Self::Heatmap(e) => write!(f, "heatmap: {e}"),
            Self::ZeroWalkCount => write!(f, "walk_count must be at least 1"),
            Self::ZeroDrawSpeed => write!(f, "draw_speed must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Params(e) => Some(e),
            Self::Heatmap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Params(e)
    }
}

impl From<HeatmapError> for ConfigError {
    fn from(e: HeatmapError) -> Self {
        Self::Heatmap(e)
    }
}

// ── HeatmapConfig ──────────────────────────────────────────────────

/// Heatmap overlay switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeatmapConfig {
    /// Whether the visitation grid is maintained at all. Default: false.
    pub enabled: bool,
    /// Aggregate every walk instead of only the primary one. Only takes
    /// effect with more than one walk. Default: false.
    pub all_walks: bool,
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Parameters of the primary walk; walk `i` uses `seed + i`.
    pub params: WalkParams,
    /// Number of walks generated. Default: 1.
    pub walk_count: usize,
    /// Steps the cursor advances per tick. Default: 5.
    pub draw_speed: usize,
    /// Heatmap overlay switches.
    pub heatmap: HeatmapConfig,
    /// Background grid spacing. `None` follows `params.step_length`.
    pub grid_cell_size: Option<f64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            params: WalkParams::default(),
            walk_count: 1,
            draw_speed: 5,
            heatmap: HeatmapConfig::default(),
            grid_cell_size: None,
        }
    }
}

impl SessionConfig {
    /// Resolved background grid spacing.
    pub fn grid_cell_size(&self) -> f64 {
        self.grid_cell_size.unwrap_or(self.params.step_length)
    }

    /// Heatmap cells are twice the background grid spacing.
    pub fn heatmap_cell_size(&self) -> Result<CellSize, HeatmapError> {
        CellSize::new(self.grid_cell_size() * 2.0)
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        if self.walk_count == 0 {
            return Err(ConfigError::ZeroWalkCount);
        }
        if self.draw_speed == 0 {
            return Err(ConfigError::ZeroDrawSpeed);
        }
        self.heatmap_cell_size()?;
        Ok(())
    }
}

// ── ParamRanges ────────────────────────────────────────────────────

/// Ranges accepted from interactive or URL input.
///
/// Out-of-range values are clamped; non-finite ones fall back to the
/// default parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamRanges {
    /// Default: `1..=9999`.
    pub seed: RangeInclusive<u32>,
    /// Default: `10..=5000`.
    pub steps: RangeInclusive<usize>,
    /// Default: `1.0..=20.0`; values are also rounded to an integer.
    pub step_length: RangeInclusive<f64>,
    /// Default: `1..=100`.
    pub walk_count: RangeInclusive<usize>,
    /// Default: `1.0..=3.0`. Smaller tail exponents give step lengths
    /// beyond `1e20`.
    pub levy_alpha: RangeInclusive<f64>,
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            seed: 1..=9999,
            steps: 10..=5000,
            step_length: 1.0..=20.0,
            walk_count: 1..=100,
            levy_alpha: 1.0..=3.0,
        }
    }
}

impl ParamRanges {
    /// `params` with every field forced into range.
    pub fn clamp_params(&self, params: &WalkParams) -> WalkParams {
        let defaults = WalkParams::default();
        let step_length = if params.step_length.is_finite() {
            params
                .step_length
                .round()
                .clamp(*self.step_length.start(), *self.step_length.end())
        } else {
            defaults.step_length
        };
        let levy_alpha = params
            .levy_alpha
            .filter(|a| a.is_finite())
            .map(|a| a.clamp(*self.levy_alpha.start(), *self.levy_alpha.end()));

        WalkParams {
            seed: params.seed.clamp(*self.seed.start(), *self.seed.end()),
            steps: params.steps.clamp(*self.steps.start(), *self.steps.end()),
            step_length,
            walk_type: params.walk_type,
            levy_alpha,
        }
    }

    /// `count` forced into the walk-count range.
    pub fn clamp_walk_count(&self, count: usize) -> usize {
        count.clamp(*self.walk_count.start(), *self.walk_count.end())
    }
}
