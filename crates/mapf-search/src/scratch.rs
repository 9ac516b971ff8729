//! Per-call scratch: the state arena, the frontier, and the seen set.
//!
//! States live in a flat `Vec` and refer to their parent by [`StateId`]
//! rather than by pointer.  The tree can therefore never form a cycle, and
//! dropping an entire search is a single `clear()`.  The planner owns one
//! `SearchScratch` and clears it between agents; capacity is kept so later
//! agents do not re-allocate.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use mapf_core::{Cell, Timestep, typed_id};

typed_id! {
    /// Handle of a state in [`SearchScratch`].  Handles are handed out in
    /// creation order, so comparing them compares insertion order.
    pub struct StateId(u32);
}

/// One node of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub cell:   Cell,
    pub at:     Timestep,
    /// Accumulated cost.  Every step costs one timestep, so `g == at`.
    pub g:      u32,
    /// Manhattan distance to the goal.
    pub h:      u32,
    /// `g + h`.
    pub f:      u32,
    /// `StateId::INVALID` for the root.
    pub parent: StateId,
}

impl SearchState {
    pub fn root(cell: Cell, h: u32) -> Self {
        Self { cell, at: Timestep::ZERO, g: 0, h, f: h, parent: StateId::INVALID }
    }

    pub fn child(parent_id: StateId, parent: &SearchState, cell: Cell, h: u32) -> Self {
        let g = parent.g + 1;
        Self { cell, at: parent.at.next(), g, h, f: g + h, parent: parent_id }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        !self.parent.is_valid()
    }
}

/// Frontier key: (priority, h, handle).  `Reverse` turns the max-heap into a
/// min-heap; `h` then the handle break ties towards states closer to the goal
/// and then towards older states.
pub(crate) type OpenEntry = Reverse<(u64, u32, StateId)>;

/// Reusable search storage.
#[derive(Default)]
pub struct SearchScratch {
    pub(crate) states: Vec<SearchState>,
    pub(crate) open:   BinaryHeap<OpenEntry>,
    pub(crate) seen:   FxHashSet<(Cell, Timestep)>,
}

impl SearchScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every state, frontier entry and seen mark.  Keeps capacity.
    pub fn clear(&mut self) {
        self.states.clear();
        self.open.clear();
        self.seen.clear();
    }

    /// Number of states created by the last search.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, indexable by `StateId::index()`.
    #[inline]
    pub fn states(&self) -> &[SearchState] {
        &self.states
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &SearchState {
        &self.states[id.index()]
    }

    /// Frontier entries still queued.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Store `state` and return its handle, or `None` once `u32` handles
    /// run out.
    pub(crate) fn alloc(&mut self, state: SearchState) -> Option<StateId> {
        let id = StateId::try_from(self.states.len()).ok().filter(|id| id.is_valid())?;
        self.states.push(state);
        Some(id)
    }

    /// Record `(cell, at)` as generated.  Returns `false` if it already was.
    #[inline]
    pub(crate) fn mark_seen(&mut self, cell: Cell, at: Timestep) -> bool {
        self.seen.insert((cell, at))
    }

    #[inline]
    pub(crate) fn push_open(&mut self, priority: u64, h: u32, id: StateId) {
        self.open.push(Reverse((priority, h, id)));
    }

    #[inline]
    pub(crate) fn pop_open(&mut self) -> Option<StateId> {
        self.open.pop().map(|Reverse((_, _, id))| id)
    }
}
