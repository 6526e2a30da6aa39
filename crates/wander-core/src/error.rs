//! Error types for walk construction.

use std::error::Error;
use std::fmt;

/// Errors from validating [`WalkParams`](crate::WalkParams) or building a
/// [`Walk`](crate::Walk).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// `step_length` is NaN, infinite, zero, or negative.
    InvalidStepLength {
        /// The rejected value.
        value: f64,
    },
    /// `levy_alpha` is NaN, infinite, zero, or negative.
    InvalidLevyAlpha {
        /// The rejected value.
        value: f64,
    },
    /// A walk was built from an empty point sequence.
    EmptyWalk,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepLength { value } => {
                write!(f, "step_length must be finite and positive, got {value}")
            }
            Self::InvalidLevyAlpha { value } => {
                write!(f, "levy_alpha must be finite and positive, got {value}")
            }
            Self::EmptyWalk => write!(f, "walk must contain at least the origin point"),
        }
    }
}

impl Error for ParamError {}
