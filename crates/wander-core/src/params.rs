//! Walk model selection and generation parameters.

use std::fmt;

use crate::error::ParamError;

/// Tail exponent used for Lévy flights when [`WalkParams::levy_alpha`] is unset.
pub const DEFAULT_LEVY_ALPHA: f64 = 1.5;

/// The stochastic model used to generate a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WalkType {
    /// Unit steps in a uniformly random direction.
    #[default]
    Isotropic,
    /// Unit steps along one of the four cardinal directions.
    Lattice,
    /// Uniform direction with Pareto-tailed step lengths.
    Levy,
    /// Lattice steps that never revisit a site; may terminate early.
    SelfAvoiding,
}

impl WalkType {
    /// All variants, in declaration order.
    pub const ALL: [WalkType; 4] = [
        WalkType::Isotropic,
        WalkType::Lattice,
        WalkType::Levy,
        WalkType::SelfAvoiding,
    ];

    /// Stable lowercase name (`"isotropic"`, `"lattice"`, `"levy"`, `"self-avoiding"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Isotropic => "isotropic",
            Self::Lattice => "lattice",
            Self::Levy => "levy",
            Self::SelfAvoiding => "self-avoiding",
        }
    }

    /// Whether consecutive points lie on a square lattice.
    pub fn is_lattice(self) -> bool {
        matches!(self, Self::Lattice | Self::SelfAvoiding)
    }
}

impl fmt::Display for WalkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters that fully determine a generated walk.
///
/// Two walks generated from equal parameters are identical point for point.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkParams {
    /// PRNG seed.
    pub seed: u32,
    /// Number of steps requested. The walk holds `steps + 1` points.
    pub steps: usize,
    /// Base step length. Must be finite and positive.
    pub step_length: f64,
    /// Stochastic model.
    pub walk_type: WalkType,
    /// Pareto tail exponent for [`WalkType::Levy`]. Ignored otherwise.
    pub levy_alpha: Option<f64>,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: 500,
            step_length: 5.0,
            walk_type: WalkType::Isotropic,
            levy_alpha: None,
        }
    }
}

impl WalkParams {
    /// Convenience constructor with no Lévy exponent.
    pub fn new(seed: u32, steps: usize, step_length: f64, walk_type: WalkType) -> Self {
        Self {
            seed,
            steps,
            step_length,
            walk_type,
            levy_alpha: None,
        }
    }

    /// Set the Lévy tail exponent.
    pub fn with_levy_alpha(mut self, alpha: f64) -> Self {
        self.levy_alpha = Some(alpha);
        self
    }

    /// The same parameters with a different seed.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Effective Lévy exponent: the configured value or [`DEFAULT_LEVY_ALPHA`].
    pub fn effective_levy_alpha(&self) -> f64 {
        self.levy_alpha.unwrap_or(DEFAULT_LEVY_ALPHA)
    }

    /// Check construction-level invariants.
    ///
    /// `levy_alpha` is only checked for [`WalkType::Levy`].
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.step_length.is_finite() || self.step_length <= 0.0 {
            return Err(ParamError::InvalidStepLength {
                value: self.step_length,
            });
        }
        if self.walk_type == WalkType::Levy {
            let alpha = self.effective_levy_alpha();
            if !alpha.is_finite() || alpha <= 0.0 {
                return Err(ParamError::InvalidLevyAlpha { value: alpha });
            }
        }
        Ok(())
    }
}
