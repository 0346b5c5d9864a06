//! Square grid topology for the Horde outbreak simulation.
//!
//! Defines [`SquareGrid`] — a perfectly square 2D lattice with an
//! 8-connected (Moore) neighbourhood — along with the [`EdgeBehavior`]
//! boundary policy and the randomized neighbour ordering the movement
//! phase relies on to keep flux allocation statistically isotropic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod square;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use square::{SquareGrid, FORWARD_OFFSETS};
