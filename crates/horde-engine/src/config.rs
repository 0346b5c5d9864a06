//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use horde_core::{ParamError, SimParams};
use horde_space::{EdgeBehavior, SpaceError};

/// Everything needed to build a [`GridWorld`](crate::GridWorld).
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Model parameters.
    pub params: SimParams,
    /// Minimum number of grid cells; rounded up to a perfect square.
    pub requested_cells: usize,
    /// Boundary handling for the lattice.
    pub edge: EdgeBehavior,
    /// Base seed for scatter and propagation randomness.
    pub seed: u64,
    /// Worker threads per propagation pass; `None` follows the host.
    pub workers: Option<usize>,
    /// Realtime tick rate; `None` uses the 10 Hz default.
    pub tick_rate_hz: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            params: SimParams::default(),
            requested_cells: 256,
            edge: EdgeBehavior::Absorb,
            seed: 0,
            workers: None,
            tick_rate_hz: None,
        }
    }
}

impl SimConfig {
    /// Check every field for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        if self.requested_cells == 0 {
            return Err(ConfigError::Space(SpaceError::EmptySpace));
        }
        if let Some(hz) = self.tick_rate_hz {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(ConfigError::InvalidTickRate { value: hz });
            }
        }
        Ok(())
    }
}

/// Construction failures for worlds and runners.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A model parameter failed validation.
    Params(ParamError),
    /// The lattice could not be built.
    Space(SpaceError),
    /// `tick_rate_hz` was zero, negative, or not finite.
    InvalidTickRate {
        /// The rejected rate.
        value: f64,
    },
    /// The OS refused to spawn the tick thread.
    ThreadSpawn {
        /// OS error text.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Params(e) => write!(f, "invalid parameters: {e}"),
            ConfigError::Space(e) => write!(f, "invalid grid: {e}"),
            ConfigError::InvalidTickRate { value } => {
                write!(f, "tick rate must be finite and positive, got {value}")
            }
            ConfigError::ThreadSpawn { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Params(e) => Some(e),
            ConfigError::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        ConfigError::Params(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        ConfigError::Space(e)
    }
}
