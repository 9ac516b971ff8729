//! Breadth-first queries on the static map (no time, no other agents).
//!
//! If the goal is unreachable here it is unreachable in space-time too, so
//! the search uses [`reachable`] as an O(cells) early exit before opening a
//! frontier that would otherwise run to its timestep bound.

use std::collections::VecDeque;

use mapf_core::Cell;

use crate::Grid;

/// Shortest 4-connected path length from `from` to `to`, ignoring agents.
///
/// Returns `None` if either endpoint is impassable or no path exists.
pub fn distance<G: Grid>(grid: &G, from: Cell, to: Cell) -> Option<u32> {
    if !grid.passable(from) || !grid.passable(to) {
        return None;
    }
    if from == to {
        return Some(0);
    }

    let (_, cols) = grid.dimensions();
    let slot = |c: Cell| c.row as usize * cols as usize + c.col as usize;

    let mut seen = vec![false; grid.cell_count()];
    let mut queue: VecDeque<(Cell, u32)> = VecDeque::new();
    seen[slot(from)] = true;
    queue.push_back((from, 0));

    while let Some((cell, dist)) = queue.pop_front() {
        for next in grid.neighbours(cell) {
            if seen[slot(next)] {
                continue;
            }
            if next == to {
                return Some(dist + 1);
            }
            seen[slot(next)] = true;
            queue.push_back((next, dist + 1));
        }
    }
    None
}

/// `true` if a static path from `from` to `to` exists.
#[inline]
pub fn reachable<G: Grid>(grid: &G, from: Cell, to: Cell) -> bool {
    distance(grid, from, to).is_some()
}
