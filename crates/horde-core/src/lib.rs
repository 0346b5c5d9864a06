//! Core types for the Horde outbreak simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the sign conventions for the two populations, the simulation
//! parameter record with its validation rules, the closed set of named
//! parameter presets, and the tick counter type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod faction;
pub mod id;
pub mod params;
pub mod preset;

pub use error::ParamError;
pub use faction::Faction;
pub use id::TickId;
pub use params::SimParams;
pub use preset::{Preset, PresetRates};

/// Densities with magnitude at or below this are treated as empty.
///
/// Used for all "is this cell occupied" decisions so that floating
/// residue left by repeated add/subtract cycles never counts as a
/// phantom population.
pub const DENSITY_EPSILON: f64 = 1e-8;
