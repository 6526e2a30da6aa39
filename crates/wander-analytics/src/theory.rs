//! Reference diffusion exponents for each walk model.

use wander_core::{WalkType, DEFAULT_LEVY_ALPHA};

/// Expected long-time MSD exponent for `walk_type`.
///
/// Brownian models (isotropic, lattice) diffuse normally (`1.0`). A
/// truncated Lévy flight with tail exponent α is reported as `2/α`.
/// Growing self-avoiding walks have no closed form here and yield `None`.
pub fn theoretical_exponent(walk_type: WalkType, levy_alpha: Option<f64>) -> Option<f64> {
    match walk_type {
        WalkType::Isotropic | WalkType::Lattice => Some(1.0),
        WalkType::Levy => Some(2.0 / levy_alpha.unwrap_or(DEFAULT_LEVY_ALPHA)),
        WalkType::SelfAvoiding => None,
    }
}
