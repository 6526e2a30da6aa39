//! Core types for the Wander random-walk simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by every other crate in the workspace: points, walk
//! parameters, generated walks, and the parameter error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod point;
pub mod walk;

pub use error::ParamError;
pub use params::{WalkParams, WalkType, DEFAULT_LEVY_ALPHA};
pub use point::Point;
pub use walk::Walk;
