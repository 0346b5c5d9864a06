//! Simulation parameters and validation.

use crate::error::ParamError;
use crate::faction::Faction;

/// Immutable parameter record for one simulation run.
///
/// Owned by the step driver; changing any value requires a full grid
/// reset, never in-place mutation mid-run. [`validate()`](Self::validate)
/// must pass before the record enters the compute path — the phases
/// themselves assume finite, in-range values and do not re-check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Infection growth rate `a`: pairwise encounter mass transferred
    /// toward the zombie side per unit time.
    pub infection_growth: f64,
    /// Zombie loss rate `b`: fraction of contacting human mass that
    /// destroys zombies per unit time.
    pub zombie_loss: f64,
    /// Human loss rate `c`: fraction of contacting zombie mass that
    /// removes humans per unit time.
    pub human_loss: f64,
    /// Probability that a movement attempt toward one neighbour is made
    /// at all. Movement is per-tick, not scaled by dt.
    pub move_probability: f64,
    /// Total population units scattered at reset.
    pub total_population: u64,
    /// Initial zombie units (`z0`); humans get the remainder.
    pub initial_zombies: u64,
    /// Hard per-cell density magnitude bound (carrying capacity).
    pub cell_capacity: f64,
    /// Largest stable substep; `propagate` splits bigger timesteps.
    pub max_substep: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            infection_growth: 0.3,
            zombie_loss: 0.0,
            human_loss: 0.0,
            move_probability: 0.6,
            total_population: 10,
            initial_zombies: 1,
            cell_capacity: 10.0,
            max_substep: 1.0,
        }
    }
}

impl SimParams {
    /// Initial human units: `total_population - initial_zombies`.
    ///
    /// Callers must have validated the record first; on an invalid
    /// record this saturates at zero rather than underflowing.
    pub fn initial_humans(&self) -> u64 {
        self.total_population.saturating_sub(self.initial_zombies)
    }

    /// The loss rate applied to mass of the given faction.
    pub fn loss_rate(&self, faction: Faction) -> f64 {
        match faction {
            Faction::Human => self.human_loss,
            Faction::Zombie => self.zombie_loss,
        }
    }

    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: non-finite rates, negative
    /// rates, `move_probability` outside [0, 1], non-positive capacity
    /// or substep bound, zero population, or `initial_zombies` larger
    /// than the population.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("infection_growth", self.infection_growth),
            ("zombie_loss", self.zombie_loss),
            ("human_loss", self.human_loss),
            ("move_probability", self.move_probability),
            ("cell_capacity", self.cell_capacity),
            ("max_substep", self.max_substep),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }
        for (name, value) in [
            ("infection_growth", self.infection_growth),
            ("zombie_loss", self.zombie_loss),
            ("human_loss", self.human_loss),
        ] {
            if value < 0.0 {
                return Err(ParamError::Negative { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.move_probability) {
            return Err(ParamError::ProbabilityOutOfRange {
                name: "move_probability",
                value: self.move_probability,
            });
        }
        if self.cell_capacity <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "cell_capacity",
                value: self.cell_capacity,
            });
        }
        if self.max_substep <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "max_substep",
                value: self.max_substep,
            });
        }
        if self.total_population == 0 {
            return Err(ParamError::ZeroPopulation);
        }
        if self.initial_zombies > self.total_population {
            return Err(ParamError::InitialZombiesExceedPopulation {
                initial_zombies: self.initial_zombies,
                total_population: self.total_population,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_valid() {
        SimParams::default().validate().unwrap();
    }

    #[test]
    fn rejects_nan_rate() {
        let params = SimParams {
            infection_growth: f64::NAN,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonFinite {
                name: "infection_growth",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_loss() {
        let params = SimParams {
            zombie_loss: -0.5,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::Negative {
                name: "zombie_loss",
                ..
            })
        ));
    }

    #[test]
    fn rejects_probability_above_one() {
        let params = SimParams {
            move_probability: 1.5,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_zero_capacity() {
        let params = SimParams {
            cell_capacity: 0.0,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonPositive {
                name: "cell_capacity",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_population() {
        let params = SimParams {
            total_population: 0,
            initial_zombies: 0,
            ..SimParams::default()
        };
        assert_eq!(params.validate(), Err(ParamError::ZeroPopulation));
    }

    #[test]
    fn rejects_too_many_zombies() {
        let params = SimParams {
            total_population: 5,
            initial_zombies: 6,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::InitialZombiesExceedPopulation { .. })
        ));
    }

    #[test]
    fn initial_humans_is_remainder() {
        let params = SimParams {
            total_population: 100,
            initial_zombies: 30,
            ..SimParams::default()
        };
        assert_eq!(params.initial_humans(), 70);
    }

    #[test]
    fn loss_rate_selects_by_faction() {
        let params = SimParams {
            zombie_loss: 0.7,
            human_loss: 0.2,
            ..SimParams::default()
        };
        assert_eq!(params.loss_rate(crate::Faction::Zombie), 0.7);
        assert_eq!(params.loss_rate(crate::Faction::Human), 0.2);
    }

    proptest! {
        #[test]
        fn finite_in_range_records_validate(
            a in 0.0f64..10.0,
            b in 0.0f64..10.0,
            c in 0.0f64..10.0,
            p in 0.0f64..=1.0,
            total in 1u64..10_000,
            z0_frac in 0.0f64..=1.0,
            cap in 0.1f64..1e6,
            substep in 0.01f64..100.0,
        ) {
            let params = SimParams {
                infection_growth: a,
                zombie_loss: b,
                human_loss: c,
                move_probability: p,
                total_population: total,
                initial_zombies: (total as f64 * z0_frac) as u64,
                cell_capacity: cap,
                max_substep: substep,
            };
            prop_assert!(params.validate().is_ok());
        }
    }
}
