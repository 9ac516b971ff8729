//! The `Grid` trait: everything the planner needs to know about a map.
//!
//! # Pluggability
//!
//! `mapf-planner` and `mapf-search` are generic over `G: Grid`, so
//! applications can plan on their own map types without converting them to
//! [`GridMap`][crate::GridMap].  Only [`dimensions`][Grid::dimensions] and
//! [`passable`][Grid::passable] are required.
//!
//! # Scratch state
//!
//! Some map implementations annotate cells while a search runs (visit
//! marks, cached distances, …).  The planner calls
//! [`reset_scratch`][Grid::reset_scratch] before every agent so nothing from
//! one agent's search is visible to the next.

use mapf_core::Cell;

/// Unit moves in neighbour order: north, south, west, east.
pub const MOVES: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Static map queried by the planner.
pub trait Grid {
    /// `(rows, cols)`.
    fn dimensions(&self) -> (u32, u32);

    /// Whether `cell` may ever be occupied.  Must be `false` off-grid.
    fn passable(&self, cell: Cell) -> bool;

    /// Clear any per-search annotations.  Default: nothing to clear.
    fn reset_scratch(&mut self) {}

    /// `true` if `cell` lies inside the grid bounds.
    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        let (rows, cols) = self.dimensions();
        cell.row < rows && cell.col < cols
    }

    /// Total number of cells, passable or not.
    #[inline]
    fn cell_count(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows as usize * cols as usize
    }

    /// Passable 4-connected neighbours of `cell`, in [`MOVES`] order.
    fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_
    where
        Self: Sized,
    {
        MOVES
            .iter()
            .filter_map(move |&(dr, dc)| cell.offset(dr, dc))
            .filter(move |&c| self.passable(c))
    }
}
