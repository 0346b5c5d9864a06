//! Initial population placement.

use crate::field::DensityGrid;
use horde_space::SquareGrid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Scatter whole-unit populations uniformly at random over `space`.
///
/// Each zombie unit subtracts `1.0` from a uniformly chosen cell and
/// each human unit adds `1.0`; zombies are placed first. Units landing
/// on the same cell sum, so opposing units can cancel in place: the
/// signed total always equals `humans - zombies`, but the magnitude
/// total may come out below `humans + zombies`.
///
/// The same `(space, humans, zombies, seed)` always produces the same
/// grid.
pub fn scatter_populations(
    space: SquareGrid,
    humans: u64,
    zombies: u64,
    seed: u64,
) -> DensityGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = DensityGrid::zeros(space);
    let cell_count = space.cell_count();

    for _ in 0..zombies {
        let idx = rng.random_range(0..cell_count);
        grid.cells_mut()[idx] -= 1.0;
    }
    for _ in 0..humans {
        let idx = rng.random_range(0..cell_count);
        grid.cells_mut()[idx] += 1.0;
    }
    grid
}
