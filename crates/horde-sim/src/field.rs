//! Signed density field over a square grid.

use horde_core::{Faction, DENSITY_EPSILON};
use horde_space::SquareGrid;

/// One signed `f64` density per cell of a [`SquareGrid`].
///
/// Positive density is human population, negative is zombie population,
/// magnitudes are head counts. A cell within [`DENSITY_EPSILON`] of zero
/// is considered empty.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    space: SquareGrid,
    cells: Vec<f64>,
}

impl DensityGrid {
    /// An all-empty grid over `space`.
    pub fn zeros(space: SquareGrid) -> Self {
        Self {
            space,
            cells: vec![0.0; space.cell_count()],
        }
    }

    /// A grid over `space` with explicit cell contents.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != space.cell_count()`.
    pub fn from_cells(space: SquareGrid, cells: Vec<f64>) -> Self {
        assert_eq!(
            cells.len(),
            space.cell_count(),
            "cell buffer does not match grid size"
        );
        Self { space, cells }
    }

    /// The underlying lattice.
    pub fn space(&self) -> SquareGrid {
        self.space
    }

    /// Density at `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> f64 {
        self.cells[self.space.index(row, col)]
    }

    /// Overwrite the density at `(row, col)`.
    pub fn set(&mut self, row: i32, col: i32, value: f64) {
        let idx = self.space.index(row, col);
        self.cells[idx] = value;
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable flat view of all cells.
    pub fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Consume the grid, returning the flat cell buffer.
    pub fn into_cells(self) -> Vec<f64> {
        self.cells
    }

    /// The faction occupying `(row, col)`, if any.
    pub fn faction_at(&self, row: i32, col: i32) -> Option<Faction> {
        Faction::of_density(self.get(row, col))
    }

    /// Sum of all positive densities.
    pub fn human_population(&self) -> f64 {
        self.cells.iter().filter(|&&d| d > 0.0).sum()
    }

    /// Sum of magnitudes of all negative densities.
    pub fn zombie_population(&self) -> f64 {
        self.cells.iter().filter(|&&d| d < 0.0).map(|d| -d).sum()
    }

    /// Signed sum over all cells.
    pub fn signed_total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Sum of `|density|` over all cells.
    pub fn total_magnitude(&self) -> f64 {
        self.cells.iter().map(|d| d.abs()).sum()
    }

    /// Number of cells holding more than [`DENSITY_EPSILON`] of density.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|d| d.abs() > DENSITY_EPSILON)
            .count()
    }

    /// Clamp every cell into `[-capacity, capacity]`.
    pub fn clamp_to(&mut self, capacity: f64) {
        for cell in &mut self.cells {
            *cell = cell.clamp(-capacity, capacity);
        }
    }
}
