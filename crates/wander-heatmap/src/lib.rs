//! Incremental visitation-grid rasterization for Wander walks.
//!
//! A [`VisitationGrid`] counts, per square cell, how many walk segments
//! have passed through it. Grid geometry ([`GridBounds`]) is fixed when the
//! grid is created, from the bounding box of the *whole* point set, so the
//! visible prefix of a walk can grow without ever reallocating.
//!
//! # Computation modes
//!
//! - [`compute_heatmap_grid`]: zeroed grid, segments `[0, up_to_step)`.
//! - [`extend_heatmap_grid`]: rasterize only `[from_step, to_step)` into
//!   an existing grid, in place.
//! - [`compute_multi_walk_heatmap_grid`]: one grid over several walks.
//!
//! Extending a grid computed at step `a` to step `b` yields exactly the
//! grid computed from scratch at `b`. Grids cannot be rewound: on backward
//! cursor motion recompute from scratch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod compute;
pub mod error;
pub mod grid;
mod raster;

pub use bounds::{CellSize, GridBounds, MAX_GRID_DIM};
pub use compute::{compute_heatmap_grid, compute_multi_walk_heatmap_grid, extend_heatmap_grid};
pub use error::HeatmapError;
pub use grid::VisitationGrid;
