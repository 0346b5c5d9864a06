//! Propagation core for the horde simulation.
//!
//! The state of a simulation is a [`DensityGrid`]: one signed `f64` per
//! cell, positive for humans and negative for zombies. A tick is a pure
//! transform built from two phases:
//!
//! 1. **Interaction** ([`interaction_phase`]): adjacent opposite-sign
//!    densities fight, producing a per-cell delta field plus a recovered
//!    mass rate. Each adjacent pair is evaluated exactly once via the
//!    forward half-neighbourhood scan.
//! 2. **Movement** ([`movement_phase`]): each cell stochastically
//!    redistributes its density over its Moore neighbourhood, never
//!    moving mass onto an opposite-sign cell.
//!
//! [`propagate`] glues the phases together, splitting the requested
//! time delta into stable sub-steps and clamping each cell to the
//! configured capacity. All randomness derives from the seed carried in
//! [`StepContext`] and is streamed per grid row, so the random draws a
//! cell sees never depend on how many workers ran the pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod field;
mod interaction;
mod movement;
mod parallel;
mod rng;
mod scatter;
mod step;

pub use field::DensityGrid;
pub use interaction::{interaction_phase, InteractionOutcome};
pub use movement::movement_phase;
pub use parallel::resolved_workers;
pub use scatter::scatter_populations;
pub use step::{propagate, PropagateResult, StepContext};
