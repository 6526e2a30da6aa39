//! Power-law fit of an MSD curve by log-log least squares.

use crate::msd::MsdPoint;

/// Minimum number of usable `(t > 0, msd > 0)` samples for a fit.
pub const MIN_POINTS_FOR_EXPONENT: usize = 10;

/// `msd(t) ≈ exp(log_prefactor) · t^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerLawFit {
    /// Slope of `ln msd` against `ln t`.
    pub exponent: f64,
    /// Intercept of the log-log fit.
    pub log_prefactor: f64,
    /// Number of samples used.
    pub samples: usize,
}

/// Ordinary least squares of `ln msd` on `ln t`.
///
/// `None` with fewer than [`MIN_POINTS_FOR_EXPONENT`] usable samples, or
/// when all usable `t` are equal.
pub fn fit_power_law(curve: &[MsdPoint]) -> Option<PowerLawFit> {
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    let mut n = 0usize;
    for p in curve.iter().filter(|p| p.t > 0 && p.msd > 0.0 && p.msd.is_finite()) {
        let x = (p.t as f64).ln();
        let y = p.msd.ln();
        sx += x;
        sy += y;
        sxx += x * x;
        sxy += x * y;
        n += 1;
    }
    if n < MIN_POINTS_FOR_EXPONENT {
        return None;
    }

    let nf = n as f64;
    let denom = nf * sxx - sx * sx;
    if denom.abs() < 1e-12 {
        return None;
    }
    let exponent = (nf * sxy - sx * sy) / denom;
    Some(PowerLawFit {
        exponent,
        log_prefactor: (sy - exponent * sx) / nf,
        samples: n,
    })
}

/// Diffusion exponent α in `MSD(t) ∝ t^α`; `None` when no fit is possible.
pub fn diffusion_exponent(curve: &[MsdPoint]) -> Option<f64> {
    fit_power_law(curve).map(|f| f.exponent)
}
