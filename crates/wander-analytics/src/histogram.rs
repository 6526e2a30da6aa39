//! Linear and logarithmic histograms.
//!
//! Bins partition `[min, max]` of the observed values contiguously. The top
//! edge is closed by clamping: `idx = min(floor((v - min) / width), bins - 1)`,
//! so the maximum sample always lands in the last bin.

/// One histogram bin covering `[lo, hi)` (the last bin also includes `hi`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Lower edge.
    pub lo: f64,
    /// Upper edge.
    pub hi: f64,
    /// Number of samples in the bin.
    pub count: usize,
}

/// Bin-edge spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistogramScale {
    /// Equal-width bins.
    Linear,
    /// Geometrically spaced bins over positive values.
    Log,
}

impl HistogramScale {
    /// Build a histogram with this spacing.
    pub fn build(self, values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
        match self {
            Self::Linear => build_histogram(values, bin_count),
            Self::Log => build_log_histogram(values, bin_count),
        }
    }
}

/// Equal-width histogram of the finite entries of `values`.
///
/// Empty input (or `bin_count == 0`) gives no bins. If every value is the
/// same, the result is a single bin `[v, v + 1)` holding all samples.
pub fn build_histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    bin_values(&finite, bin_count, |e| e)
}

/// Log-spaced histogram of the positive finite entries of `values`.
///
/// Edges are `exp(ln(min) + i·w)` with `w = (ln(max) − ln(min)) / bin_count`.
pub fn build_log_histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let positive: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    if positive.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let logs: Vec<f64> = positive.iter().map(|v| v.ln()).collect();
    let (lo, hi) = min_max(&logs);
    if lo == hi {
        return vec![HistogramBin {
            lo: positive[0],
            hi: positive[0] + 1.0,
            count: positive.len(),
        }];
    }
    bin_values(&logs, bin_count, f64::exp)
}

/// Shared binning over already-transformed samples; `edge` maps a bin edge
/// from sample space back to value space.
fn bin_values(samples: &[f64], bin_count: usize, edge: impl Fn(f64) -> f64) -> Vec<HistogramBin> {
    if samples.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let (min, max) = min_max(samples);
    if min == max {
        let v = edge(min);
        return vec![HistogramBin {
            lo: v,
            hi: v + 1.0,
            count: samples.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lo: edge(min + i as f64 * width),
            hi: edge(min + (i + 1) as f64 * width),
            count: 0,
        })
        .collect();
    for &s in samples {
        // `as usize` saturates, so rounding just below zero still maps to bin 0.
        let idx = (((s - min) / width).floor() as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }
    bins
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
