//! Deterministic random-walk generators for Wander.
//!
//! Every generator seeds one [`Mulberry32`] stream from
//! [`WalkParams::seed`](wander_core::WalkParams) and draws from it in a fixed
//! per-step order, so a walk is fully determined by its parameters.
//!
//! | Model | Draws per step | Step length |
//! |-------|----------------|-------------|
//! | isotropic | 1 (angle) | exactly `step_length` |
//! | lattice | 1 (direction) | exactly `step_length` |
//! | levy | 2 (angle, tail) | `>= step_length` |
//! | self-avoiding | 1 (surviving direction) | exactly `step_length` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod lattice;
pub mod prng;

pub use generate::{generate_walk, generate_walks, LEVY_DRAW_FLOOR};
pub use lattice::{LatticeDir, LatticeSite};
pub use prng::Mulberry32;
