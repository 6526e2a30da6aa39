//! Wander: deterministic 2D random walks with streaming heatmaps and
//! diffusion analytics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Wander sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use wander::prelude::*;
//!
//! let config = SessionConfig {
//!     params: WalkParams::new(42, 200, 1.0, WalkType::Lattice),
//!     walk_count: 4,
//!     heatmap: HeatmapConfig { enabled: true, all_walks: true },
//!     ..SessionConfig::default()
//! };
//! let mut session = Session::new(config).unwrap();
//!
//! session.play();
//! let mut frame = session.tick().unwrap();
//! while session.is_playing() {
//!     frame = session.tick().unwrap();
//! }
//! assert!(frame.finished);
//! assert_eq!(frame.analytics.walk_count, 4);
//! assert!(session.heatmap().is_some());
//! ```
//!
//! The building blocks work on their own too:
//!
//! ```rust
//! use wander::prelude::*;
//!
//! let walk = generate_walk(&WalkParams::default()).unwrap();
//! let cell = CellSize::new(10.0).unwrap();
//! let mut grid = compute_heatmap_grid(&walk, cell, 100);
//! extend_heatmap_grid(&mut grid, &walk, 100, 500);
//! assert_eq!(grid, compute_heatmap_grid(&walk, cell, 500));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wander-core` | Points, walk parameters, walks |
//! | [`walk`] | `wander-walk` | Mulberry32 PRNG and walk generators |
//! | [`heatmap`] | `wander-heatmap` | Visitation grids and the DDA rasterizer |
//! | [`analytics`] | `wander-analytics` | Scalar stats, MSD, histograms, exponent fit |
//! | [`session`] | `wander-session` | Configuration and playback orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`wander-core`).
pub use wander_core as types;

/// Deterministic PRNG and walk generators (`wander-walk`).
pub use wander_walk as walk;

/// Visitation grids (`wander-heatmap`).
///
/// Full, incremental, and multi-walk grid computation over a
/// [`heatmap::CellSize`] fixed at grid creation.
pub use wander_heatmap as heatmap;

/// Streaming statistics (`wander-analytics`).
///
/// [`analytics::StatsAccumulator`] for one walk,
/// [`analytics::EnsembleAccumulator`] for a walk set.
pub use wander_analytics as analytics;

/// Session configuration and playback (`wander-session`).
pub use wander_session as session;

/// Common imports for typical Wander usage.
pub mod prelude {
    // Core types
    pub use wander_core::{ParamError, Point, Walk, WalkParams, WalkType};

    // Generation
    pub use wander_walk::{generate_walk, generate_walks, Mulberry32};

    // Heatmap
    pub use wander_heatmap::{
        compute_heatmap_grid, compute_multi_walk_heatmap_grid, extend_heatmap_grid, CellSize,
        HeatmapError, VisitationGrid,
    };

    // Analytics
    pub use wander_analytics::{
        AnalyticsError, EnsembleAccumulator, EnsembleAnalytics, HistogramBin, MsdPoint,
        ScalarStats, StatsAccumulator,
    };

    // Session
    pub use wander_session::{ConfigError, Frame, HeatmapConfig, Session, SessionConfig};
}
