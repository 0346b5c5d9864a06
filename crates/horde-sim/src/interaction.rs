//! Pairwise interaction between adjacent opposite-sign cells.

use crate::field::DensityGrid;
use crate::parallel::{map_bands, sum_into};
use horde_core::{Faction, SimParams};
use horde_space::FORWARD_OFFSETS;

/// Result of one interaction pass over a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionOutcome {
    /// Per-cell density change rates, same layout as the input grid.
    pub deltas: Vec<f64>,
    /// Rate at which zombie mass is destroyed (recovered) grid-wide.
    pub recovered: f64,
}

/// Evaluate every adjacent opposite-sign pair once and accumulate the
/// resulting density change rates.
///
/// For a pair with densities `a` and `b` of opposite sign:
///
/// * `|a| * |b| * infection_growth` converts toward the zombie sign on
///   both ends, so the human cell shrinks and the zombie cell deepens
///   by the same amount;
/// * each side additionally loses `|other| * loss_rate(self)` of its
///   own density toward zero.
///
/// The human side's loss at the zombie's rate is zombie mass destroyed
/// outright, reported as `recovered`. All outputs are rates: the caller
/// scales them by its sub-step duration.
///
/// Each unordered pair is visited exactly once by scanning only the
/// forward half of every cell's neighbourhood ([`FORWARD_OFFSETS`]).
/// Empty cells (within [`horde_core::DENSITY_EPSILON`] of zero) and
/// same-sign pairs contribute nothing.
pub fn interaction_phase(
    grid: &DensityGrid,
    params: &SimParams,
    workers: usize,
) -> InteractionOutcome {
    interaction_with_offsets(grid, params, workers, &FORWARD_OFFSETS)
}

fn interaction_with_offsets(
    grid: &DensityGrid,
    params: &SimParams,
    workers: usize,
    offsets: &[(i32, i32)],
) -> InteractionOutcome {
    let space = grid.space();
    let partials = map_bands(space.side(), workers, |_, rows| {
        let mut deltas = vec![0.0; space.cell_count()];
        let mut recovered = 0.0;
        for row in rows {
            for col in 0..space.side() as i32 {
                let a = grid.get(row, col);
                let Some(side_a) = Faction::of_density(a) else {
                    continue;
                };
                for (nr, nc) in space.resolve_offsets(row, col, offsets) {
                    let b = grid.get(nr, nc);
                    let Some(side_b) = Faction::of_density(b) else {
                        continue;
                    };
                    if side_a == side_b {
                        continue;
                    }
                    let a_abs = a.abs();
                    let b_abs = b.abs();
                    let converted = a_abs * b_abs * params.infection_growth;

                    // Conversion drags both ends toward the zombie sign;
                    // each side also attrits at its own loss rate per
                    // unit of opposing density.
                    deltas[space.index(row, col)] +=
                        -converted - b_abs * params.loss_rate(side_a) * side_a.direction();
                    deltas[space.index(nr, nc)] +=
                        -converted - a_abs * params.loss_rate(side_b) * side_b.direction();

                    let human_abs = match side_a {
                        Faction::Human => a_abs,
                        Faction::Zombie => b_abs,
                    };
                    recovered += human_abs * params.zombie_loss;
                }
            }
        }
        (deltas, recovered)
    });

    let mut deltas = vec![0.0; space.cell_count()];
    let mut recovered = 0.0;
    for (partial, partial_recovered) in partials {
        sum_into(&mut deltas, &partial);
        recovered += partial_recovered;
    }
    InteractionOutcome { deltas, recovered }
}
