//! Error types for ensemble analytics.

use std::error::Error;
use std::fmt;

/// Errors from [`EnsembleAccumulator::compute`](crate::EnsembleAccumulator::compute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    /// No walks were supplied; the result needs a primary walk.
    EmptyWalkSet,
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWalkSet => write!(f, "ensemble analytics need at least one walk"),
        }
    }
}

impl Error for AnalyticsError {}
