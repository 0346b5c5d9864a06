//! Boundary behavior for the square lattice.

/// How the lattice handles neighbours at its edges.
///
/// # Examples
///
/// ```
/// use horde_space::{EdgeBehavior, SquareGrid};
///
/// // Absorb: corner cells have 3 neighbours, interior cells 8.
/// let absorb = SquareGrid::new(4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(0, 0).len(), 3);
/// assert_eq!(absorb.neighbours(1, 1).len(), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// let wrap = SquareGrid::new(4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(0, 0).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
}
