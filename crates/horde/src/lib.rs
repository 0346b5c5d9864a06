//! Horde: a grid-based zombie epidemic simulation.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Horde sub-crates. For most users, adding `horde` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use horde::prelude::*;
//!
//! // 100 people, 10 of them already zombies, on a 16x16 grid.
//! let config = SimConfig {
//!     params: SimParams {
//!         total_population: 100,
//!         initial_zombies: 10,
//!         ..SimParams::default()
//!     },
//!     requested_cells: 256,
//!     seed: 42,
//!     ..SimConfig::default()
//! };
//! let mut world = GridWorld::new(config).unwrap();
//!
//! let summary = world.step(0.1);
//! assert_eq!(summary.tick, TickId(1));
//! assert!(summary.humans + summary.zombies <= 100.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `horde-core` | Parameters, presets, factions, IDs |
//! | [`space`] | `horde-space` | The square lattice and its neighbourhoods |
//! | [`sim`] | `horde-sim` | Density grid, scatter, and the propagation phases |
//! | [`solver`] | `horde-solver` | Mean-field ODE reference solution |
//! | [`engine`] | `horde-engine` | Lockstep world and realtime runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Parameters, presets, factions, and IDs (`horde-core`).
pub use horde_core as types;

/// Square lattice, edge behavior, and neighbourhoods (`horde-space`).
pub use horde_space as space;

/// Density grid, initial scatter, and the propagation phases
/// (`horde-sim`).
pub use horde_sim as sim;

/// Mean-field ODE reference solution (`horde-solver`).
pub use horde_solver as solver;

/// Lockstep world and realtime runner (`horde-engine`).
pub use horde_engine as engine;

/// Common imports for typical use.
pub mod prelude {
    pub use horde_core::{Faction, ParamError, Preset, SimParams, TickId};
    pub use horde_engine::{
        ConfigError, GridSnapshot, GridWorld, RealtimeRunner, RunnerCommand, SimConfig,
        StepSummary, WorldUpdate,
    };
    pub use horde_solver::{Populations, ReferenceSolver};
    pub use horde_space::EdgeBehavior;
}
