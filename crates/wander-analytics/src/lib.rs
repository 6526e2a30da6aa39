//! Streaming single-walk and ensemble statistics for Wander.
//!
//! Two accumulators follow an external step cursor:
//!
//! - [`StatsAccumulator`]: path length, max distance, and current
//!   displacement of one walk.
//! - [`EnsembleAccumulator`]: mean-squared displacement, diffusion
//!   exponent, and step-length / end-distance histograms over a walk set.
//!
//! Both extend incrementally while the cursor moves forward and
//! re-baseline from zero when it moves backward. Results are plain data
//! ([`ScalarStats`], [`EnsembleAnalytics`]) with no references back into
//! the accumulator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ensemble;
pub mod error;
pub mod fit;
pub mod histogram;
pub mod msd;
pub mod scalar;
pub mod theory;

pub use ensemble::{EnsembleAccumulator, EnsembleAnalytics, HISTOGRAM_BINS};
pub use error::AnalyticsError;
pub use fit::{diffusion_exponent, fit_power_law, PowerLawFit, MIN_POINTS_FOR_EXPONENT};
pub use histogram::{build_histogram, build_log_histogram, HistogramBin, HistogramScale};
pub use msd::{compute_msd, log_spaced_indices, MsdPoint, MAX_MSD_SAMPLES};
pub use scalar::{ScalarStats, StatsAccumulator};
pub use theory::theoretical_exponent;
