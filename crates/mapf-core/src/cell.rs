//! Grid coordinate type.
//!
//! `Cell` is a `(row, col)` pair of `u32`.  Rows grow downwards and columns
//! grow to the right, matching the row-major layout of `mapf_grid::GridMap`.
//! Ordering is row-major so sorted collections of cells are deterministic.

/// An immutable grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance.  This is the exact shortest-path length on an
    /// obstacle-free 4-connected grid and a lower bound everywhere else.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell `(row + dr, col + dc)`, or `None` if either coordinate would
    /// go negative or overflow.  Upper grid bounds are the grid's business.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }

    /// `true` if `other` is one of the four orthogonal neighbours.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Cell { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
