//! Error types for grid configuration.

use std::error::Error;
use std::fmt;

/// Errors from constructing heatmap geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum HeatmapError {
    /// Cell size is NaN, infinite, zero, or negative.
    InvalidCellSize {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for HeatmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for HeatmapError {}
