//! Turning a solved state into a cell sequence.

use mapf_core::Cell;

use crate::{SearchState, StateId};

/// Walk parent handles from `goal` back to the root and return the cells in
/// timestep order, one per timestep, waits included.
///
/// `states` must be the arena the search filled and `goal` a handle into it;
/// anything else is a programming error and panics on the out-of-range
/// index.
pub fn extract_path(states: &[SearchState], goal: StateId) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(states[goal.index()].at.index() + 1);
    let mut cur = goal;
    loop {
        let state = &states[cur.index()];
        cells.push(state.cell);
        if state.is_root() {
            debug_assert_eq!(state.at.0, 0, "root state must sit at t0");
            break;
        }
        debug_assert_eq!(
            states[state.parent.index()].at.next(),
            state.at,
            "parent chain must advance one timestep per link"
        );
        cur = state.parent;
    }
    cells.reverse();
    cells
}
