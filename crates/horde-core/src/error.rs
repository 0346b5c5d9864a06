//! Error types for parameter validation.

use std::error::Error;
use std::fmt;

/// Errors detected during [`SimParams::validate()`](crate::SimParams::validate).
///
/// Configuration errors surface at construction/reset time; the in-tick
/// numeric path assumes validated, finite inputs and never produces
/// errors of its own.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The non-finite value.
        value: f64,
    },
    /// A rate or bound that must be >= 0 is negative.
    Negative {
        /// Name of the offending parameter.
        name: &'static str,
        /// The negative value.
        value: f64,
    },
    /// A probability parameter is outside [0, 1].
    ProbabilityOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The out-of-range value.
        value: f64,
    },
    /// A parameter that must be strictly positive is zero or below.
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// The non-positive value.
        value: f64,
    },
    /// The total population is zero — there is nothing to simulate.
    ZeroPopulation,
    /// More initial zombies were requested than the total population.
    InitialZombiesExceedPopulation {
        /// Requested initial zombie units.
        initial_zombies: u64,
        /// Total population units.
        total_population: u64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "{name} must be >= 0, got {value}")
            }
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::ZeroPopulation => write!(f, "total_population must be at least 1"),
            Self::InitialZombiesExceedPopulation {
                initial_zombies,
                total_population,
            } => {
                write!(
                    f,
                    "initial_zombies ({initial_zombies}) exceeds \
                     total_population ({total_population})"
                )
            }
        }
    }
}

impl Error for ParamError {}
