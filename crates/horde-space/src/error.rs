//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// The requested side length exceeds the supported maximum.
    SideTooLarge {
        /// The requested side length.
        value: u32,
        /// The largest supported side length.
        max: u32,
    },
    /// The side is too small for a wrapped (toroidal) grid.
    ///
    /// Below 3 cells per axis an offset and its negation land on the
    /// same cell modulo the side, so neighbour sets collapse and the
    /// half-neighbourhood scan would visit pairs twice.
    WrapSideTooSmall {
        /// The requested side length.
        value: u32,
        /// The smallest side a wrapped grid supports.
        min: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::SideTooLarge { value, max } => {
                write!(f, "grid side {value} exceeds maximum {max}")
            }
            Self::WrapSideTooSmall { value, min } => {
                write!(f, "wrapped grid side {value} is below minimum {min}")
            }
        }
    }
}

impl Error for SpaceError {}
