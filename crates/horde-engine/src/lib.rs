//! Drivers for the horde simulation.
//!
//! Two ways to run a world:
//!
//! * [`GridWorld`] — lockstep: the caller owns the world and calls
//!   [`step`](GridWorld::step) whenever it wants time to pass.
//! * [`RealtimeRunner`] — a background thread ticks the world at a
//!   fixed rate and streams [`WorldUpdate`]s; pause, speed, and
//!   reset are driven over a command channel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod runner;
mod world;

pub use config::{ConfigError, SimConfig};
pub use runner::{RealtimeRunner, RunnerCommand, RunnerDisconnected, WorldUpdate};
pub use world::{GridSnapshot, GridWorld, StepSummary};
