//! Playback session orchestration for Wander.
//!
//! A [`Session`] owns the walk set, the step cursor, and every streaming
//! accumulator, and advances them together one [`Frame`] at a time. The
//! accumulators are explicit fields of the session; nothing is global.
//!
//! [`SessionConfig`] carries the initial parameters and is validated up
//! front. [`ParamRanges`] clamps raw user input (e.g. query-string values)
//! into the ranges the interactive front end allows; the session itself
//! never clamps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod heatmap_cache;
pub mod session;

pub use config::{ConfigError, HeatmapConfig, ParamRanges, SessionConfig};
pub use heatmap_cache::{HeatmapCache, HeatmapUpdate};
pub use session::{Frame, Session};
