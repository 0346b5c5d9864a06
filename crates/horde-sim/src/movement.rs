//! Stochastic mass-conserving redistribution of density.

use crate::field::DensityGrid;
use crate::parallel::{map_bands, sum_into};
use crate::rng::row_rng;
use horde_core::{Faction, SimParams, DENSITY_EPSILON};
use rand::prelude::*;

/// Redistribute each cell's density over its Moore neighbourhood.
///
/// Every occupied cell walks its neighbours in a per-cell shuffled
/// order. Each neighbour independently passes a `move_probability`
/// draw; a passing neighbour of non-opposing type (judged against the
/// input grid) receives a uniform slice of the cell's still-unmoved
/// magnitude. Whatever magnitude remains after the walk stays at the
/// source, so the signed sum over the grid is conserved exactly up to
/// rounding.
///
/// Randomness is streamed per row from `seed`, so the result depends
/// only on the seed and grid, not on `workers`.
pub fn movement_phase(
    grid: &DensityGrid,
    params: &SimParams,
    seed: u64,
    workers: usize,
) -> Vec<f64> {
    let space = grid.space();
    let partials = map_bands(space.side(), workers, |_, rows| {
        let mut out = vec![0.0; space.cell_count()];
        for row in rows {
            let mut rng = row_rng(seed, row);
            for col in 0..space.side() as i32 {
                let density = grid.get(row, col);
                let Some(faction) = Faction::of_density(density) else {
                    // Conserve whatever trace density is here.
                    out[space.index(row, col)] += density;
                    continue;
                };
                let sign = faction.direction();
                let mut remaining = density.abs();
                for (nr, nc) in space.shuffled_neighbours(row, col, &mut rng) {
                    if remaining <= DENSITY_EPSILON {
                        break;
                    }
                    if rng.random::<f64>() > params.move_probability {
                        continue;
                    }
                    if grid.faction_at(nr, nc) == Some(faction.opponent()) {
                        continue;
                    }
                    let transfer = rng.random_range(0.0..=remaining);
                    remaining -= transfer;
                    out[space.index(nr, nc)] += transfer * sign;
                }
                out[space.index(row, col)] += remaining * sign;
            }
        }
        out
    });

    let mut out = vec![0.0; space.cell_count()];
    for partial in partials {
        sum_into(&mut out, &partial);
    }
    out
}
