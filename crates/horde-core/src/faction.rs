//! Population type and sign conventions.
//!
//! A grid cell stores one signed density: positive magnitude means the
//! cell is human-dominated, negative means zombie-dominated. [`Faction`]
//! names the two populations and carries the sign convention so that the
//! phase code never hard-codes `+1.0`/`-1.0` inline.

use crate::DENSITY_EPSILON;

/// One of the two interacting populations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Faction {
    /// Humans — positive densities.
    Human,
    /// Zombies — negative densities.
    Zombie,
}

impl Faction {
    /// The sign applied to magnitudes of this faction: +1 for humans,
    /// -1 for zombies.
    pub fn direction(self) -> f64 {
        match self {
            Self::Human => 1.0,
            Self::Zombie => -1.0,
        }
    }

    /// The opposite faction.
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Zombie,
            Self::Zombie => Self::Human,
        }
    }

    /// Classify a signed density. Returns `None` for empty cells
    /// (`|density| <= DENSITY_EPSILON`).
    pub fn of_density(density: f64) -> Option<Self> {
        if density > DENSITY_EPSILON {
            Some(Self::Human)
        } else if density < -DENSITY_EPSILON {
            Some(Self::Zombie)
        } else {
            None
        }
    }
}
