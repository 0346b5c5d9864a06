//! Named parameter presets.
//!
//! A closed set of scenario presets, each an immutable (a, b, c) rate
//! triple: infection growth, zombie loss, human loss. Presets only
//! patch the three rates; population sizing and movement are left to
//! the caller. Lookup goes through an insertion-ordered registry so a
//! front end can list presets in definition order.

use crate::params::SimParams;
use indexmap::IndexMap;

/// (a, b, c) rate triple carried by a [`Preset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetRates {
    /// Infection growth rate `a`.
    pub infection_growth: f64,
    /// Zombie loss rate `b`.
    pub zombie_loss: f64,
    /// Human loss rate `c`.
    pub human_loss: f64,
}

/// The closed set of named scenario presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Baseline: mild infection, no losses on either side.
    Default,
    /// High-contact ecosystem that settles into coexistence.
    SavannaEquilibrium,
    /// Aggressive predators with heavy losses on both sides.
    WolfOverrun,
    /// Evenly matched populations grinding each other down.
    EndlessRivalry,
    /// Fast-spreading invader with resilient hosts.
    AlienInvasion,
    /// Slow infection, hosts fight back hard.
    HerbivoreRevolution,
    /// Both populations collapse on contact.
    MutualDestruction,
    /// Low-visibility spread with few casualties.
    SilentInfection,
    /// Gentle dynamics on both sides.
    RainforestHarmony,
}

impl Preset {
    /// All presets in menu order.
    pub const ALL: [Preset; 9] = [
        Preset::Default,
        Preset::SavannaEquilibrium,
        Preset::WolfOverrun,
        Preset::EndlessRivalry,
        Preset::AlienInvasion,
        Preset::HerbivoreRevolution,
        Preset::MutualDestruction,
        Preset::SilentInfection,
        Preset::RainforestHarmony,
    ];

    /// Human-readable preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::SavannaEquilibrium => "Savanna Equilibrium",
            Self::WolfOverrun => "Wolf Overrun",
            Self::EndlessRivalry => "Endless Rivalry",
            Self::AlienInvasion => "Alien Invasion",
            Self::HerbivoreRevolution => "Herbivore Revolution",
            Self::MutualDestruction => "Mutual Destruction",
            Self::SilentInfection => "Silent Infection",
            Self::RainforestHarmony => "Rainforest Harmony",
        }
    }

    /// The rate triple for this preset.
    pub fn rates(self) -> PresetRates {
        let (a, b, c) = match self {
            Self::Default => (0.3, 0.0, 0.0),
            Self::SavannaEquilibrium => (0.8, 0.6, 0.5),
            Self::WolfOverrun => (1.2, 1.0, 0.6),
            Self::EndlessRivalry => (1.0, 0.7, 1.0),
            Self::AlienInvasion => (1.3, 0.5, 0.8),
            Self::HerbivoreRevolution => (0.5, 0.3, 1.2),
            Self::MutualDestruction => (0.9, 1.2, 0.9),
            Self::SilentInfection => (0.6, 0.2, 0.4),
            Self::RainforestHarmony => (0.9, 0.5, 0.9),
        };
        PresetRates {
            infection_growth: a,
            zombie_loss: b,
            human_loss: c,
        }
    }

    /// Patch the three rates of `params`, leaving everything else alone.
    pub fn apply(self, params: &mut SimParams) {
        let rates = self.rates();
        params.infection_growth = rates.infection_growth;
        params.zombie_loss = rates.zombie_loss;
        params.human_loss = rates.human_loss;
    }

    /// Look up a preset by its display name.
    pub fn from_name(name: &str) -> Option<Preset> {
        registry().get(name).copied()
    }
}

/// Name-to-preset registry preserving menu order.
pub fn registry() -> IndexMap<&'static str, Preset> {
    Preset::ALL.iter().map(|&p| (p.name(), p)).collect()
}
