//! Mean-squared displacement sampling.

use std::collections::BTreeSet;

use wander_core::Walk;

/// Cap on the number of sampled time indices per MSD curve.
pub const MAX_MSD_SAMPLES: usize = 200;

/// Mean-squared displacement at one time index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MsdPoint {
    /// Time index (step number), at least 1.
    pub t: usize,
    /// Mean of `x(t)² + y(t)²` over walks that reached `t`.
    pub msd: f64,
}

/// Sorted, de-duplicated time indices in `1..=max_t`.
///
/// Every integer when `max_t <= count`; otherwise `count` log-spaced
/// samples `round(exp(i / (count-1) · ln max_t))`, which collapse to fewer
/// distinct values at the short end.
pub fn log_spaced_indices(max_t: usize, count: usize) -> Vec<usize> {
    if max_t == 0 || count == 0 {
        return Vec::new();
    }
    if max_t <= count {
        return (1..=max_t).collect();
    }
    if count == 1 {
        return vec![max_t];
    }
    let ln_max = (max_t as f64).ln();
    let denom = (count - 1) as f64;
    let set: BTreeSet<usize> = (0..count)
        .map(|i| {
            let t = ((i as f64 / denom) * ln_max).exp().round() as usize;
            t.clamp(1, max_t)
        })
        .collect();
    set.into_iter().collect()
}

/// MSD curve over `walks` for time indices up to `current_step`.
///
/// Walks shorter than a sampled `t` (e.g. trapped self-avoiding walks) do
/// not contribute at that `t`; if none reach it the sample is `0.0`.
pub fn compute_msd(walks: &[Walk], current_step: usize) -> Vec<MsdPoint> {
    log_spaced_indices(current_step, MAX_MSD_SAMPLES)
        .into_iter()
        .map(|t| {
            let (sum, n) = walks
                .iter()
                .filter_map(|w| w.get(t))
                .fold((0.0, 0usize), |(sum, n), p| (sum + p.norm_squared(), n + 1));
            MsdPoint {
                t,
                msd: if n > 0 { sum / n as f64 } else { 0.0 },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_test_utils::{axis_walk, straight_walk};

    #[test]
    fn indices_empty_for_zero() {
        assert!(log_spaced_indices(0, 200).is_empty());
        assert!(log_spaced_indices(10, 0).is_empty());
    }

    #[test]
    fn every_integer_when_short() {
        assert_eq!(log_spaced_indices(5, 200), [1, 2, 3, 4, 5]);
        assert_eq!(log_spaced_indices(200, 200).len(), 200);
    }

    #[test]
    fn log_spaced_when_long() {
        let idx = log_spaced_indices(10_000, 200);
        assert!(idx.len() <= 200);
        assert!(idx.len() > 100);
        assert_eq!(idx[0], 1);
        assert_eq!(*idx.last().unwrap(), 10_000);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_sample_is_endpoint() {
        assert_eq!(log_spaced_indices(50, 1), [50]);
    }

    #[test]
    fn straight_walk_msd_is_t_squared() {
        let walk = straight_walk(100);
        let curve = compute_msd(&[walk], 100);
        assert_eq!(curve.len(), 100);
        for p in curve {
            assert!((p.msd - (p.t * p.t) as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn orthogonal_pair_averages_to_t_squared() {
        let walks = [axis_walk(3, 1.0, 0.0), axis_walk(3, 0.0, 1.0)];
        for p in compute_msd(&walks, 3) {
            assert!((p.msd - (p.t * p.t) as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn short_walks_drop_out() {
        let walks = [straight_walk(2), axis_walk(4, 0.0, 2.0)];
        let curve = compute_msd(&walks, 4);
        // t=2 averages both (4 and 16), t=4 only the long walk (64).
        assert_eq!(curve[1], MsdPoint { t: 2, msd: 10.0 });
        assert_eq!(curve[3], MsdPoint { t: 4, msd: 64.0 });
    }

    #[test]
    fn unreached_sample_is_zero() {
        let curve = compute_msd(&[straight_walk(1)], 3);
        assert_eq!(curve[2], MsdPoint { t: 3, msd: 0.0 });
    }
}
