//! Perfectly square 2D lattice with 8-connected neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// The forward half of the Moore neighbourhood: E, SW, S, SE.
///
/// Scanning only these four offsets visits every unordered cell pair
/// exactly once, which is how the interaction phase avoids double
/// counting without any processed-pair bookkeeping. This holds on
/// every constructible grid: wrapped grids require a side of at least
/// [`SquareGrid::MIN_WRAP_SIDE`], keeping the offsets distinct modulo
/// the side.
pub const FORWARD_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A square 2D lattice of `side * side` cells with Moore connectivity.
///
/// Cells are addressed by `(row, col)` and stored row-major; boundary
/// handling is controlled by [`EdgeBehavior`]. The grid is always
/// perfectly square: [`with_cell_count`](Self::with_cell_count) rounds a
/// requested cell count up to the nearest square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    side: u32,
    edge: EdgeBehavior,
}

impl SquareGrid {
    /// Largest supported side length: `side * side` must fit in `i32`.
    pub const MAX_SIDE: u32 = 46_340;

    /// Smallest side a [`EdgeBehavior::Wrap`] grid supports.
    ///
    /// Below this, offsets are no longer distinct modulo the side: on a
    /// 2-wide torus a cell's E neighbour is also its W neighbour and
    /// the two forward diagonals coincide, so the forward
    /// half-neighbourhood would visit pairs twice.
    pub const MIN_WRAP_SIDE: u32 = 3;

    /// Create a `side x side` grid with the given edge behavior.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySpace`] for `side == 0`,
    /// [`SpaceError::SideTooLarge`] above [`MAX_SIDE`](Self::MAX_SIDE),
    /// and [`SpaceError::WrapSideTooSmall`] for wrapped grids below
    /// [`MIN_WRAP_SIDE`](Self::MIN_WRAP_SIDE).
    pub fn new(side: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if side == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if side > Self::MAX_SIDE {
            return Err(SpaceError::SideTooLarge {
                value: side,
                max: Self::MAX_SIDE,
            });
        }
        if edge == EdgeBehavior::Wrap && side < Self::MIN_WRAP_SIDE {
            return Err(SpaceError::WrapSideTooSmall {
                value: side,
                min: Self::MIN_WRAP_SIDE,
            });
        }
        Ok(Self { side, edge })
    }

    /// Create the smallest square grid holding at least `requested` cells.
    ///
    /// The side is `ceil(sqrt(requested))`, so the actual cell count is
    /// the nearest perfect square at or above the request.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`new`](Self::new).
    pub fn with_cell_count(requested: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if requested == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let mut side = (requested as f64).sqrt().ceil() as u32;
        // Float rounding can land one short for large perfect squares.
        while (side as usize) * (side as usize) < requested {
            side += 1;
        }
        Self::new(side, edge)
    }

    /// Side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total cell count (`side * side`).
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// Flat row-major index for an in-bounds `(row, col)`.
    pub fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(self.in_bounds(row, col));
        (row as usize) * (self.side as usize) + (col as usize)
    }

    /// `(row, col)` for a flat row-major index.
    pub fn coord(&self, index: usize) -> (i32, i32) {
        debug_assert!(index < self.cell_count());
        let side = self.side as usize;
        ((index / side) as i32, (index % side) as i32)
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.side as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Resolve one axis value under the edge behavior.
    fn resolve_axis(&self, val: i32) -> Option<i32> {
        let n = self.side as i32;
        if val >= 0 && val < n {
            return Some(val);
        }
        match self.edge {
            EdgeBehavior::Absorb => None,
            EdgeBehavior::Wrap => Some(((val % n) + n) % n),
        }
    }

    /// Resolve an explicit offset list against `(row, col)`.
    ///
    /// Offsets whose target falls outside the grid are dropped under
    /// [`EdgeBehavior::Absorb`] and wrapped under [`EdgeBehavior::Wrap`].
    pub fn resolve_offsets(
        &self,
        row: i32,
        col: i32,
        offsets: &[(i32, i32)],
    ) -> SmallVec<[(i32, i32); 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in offsets {
            if let (Some(nr), Some(nc)) = (self.resolve_axis(row + dr), self.resolve_axis(col + dc))
            {
                result.push((nr, nc));
            }
        }
        result
    }

    /// The up-to-8 Moore neighbours of `(row, col)` in fixed order.
    pub fn neighbours(&self, row: i32, col: i32) -> SmallVec<[(i32, i32); 8]> {
        self.resolve_offsets(row, col, &OFFSETS_8)
    }

    /// The forward half-neighbourhood of `(row, col)`.
    ///
    /// See [`FORWARD_OFFSETS`].
    pub fn forward_neighbours(&self, row: i32, col: i32) -> SmallVec<[(i32, i32); 8]> {
        self.resolve_offsets(row, col, &FORWARD_OFFSETS)
    }

    /// The Moore neighbours of `(row, col)` in randomized order.
    ///
    /// Order is randomized independently per axis per call: two
    /// Fisher-Yates shuffles of `{-1, 0, 1}`, one for row offsets and
    /// one for column offsets. A deterministic ordering here would give
    /// the movement phase's greedy "give until used up" allocation a
    /// systematic directional bias.
    pub fn shuffled_neighbours<R: Rng + ?Sized>(
        &self,
        row: i32,
        col: i32,
        rng: &mut R,
    ) -> SmallVec<[(i32, i32); 8]> {
        let mut row_offsets = [-1i32, 0, 1];
        let mut col_offsets = [-1i32, 0, 1];
        row_offsets.shuffle(rng);
        col_offsets.shuffle(rng);

        let mut result = SmallVec::new();
        for dr in row_offsets {
            for dc in col_offsets {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let (Some(nr), Some(nc)) =
                    (self.resolve_axis(row + dr), self.resolve_axis(col + dc))
                {
                    result.push((nr, nc));
                }
            }
        }
        result
    }
}
