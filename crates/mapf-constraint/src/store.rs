//! `ConstraintStore`: occupancy of already-planned agents.
//!
//! # Layout
//!
//! Two hash maps (FxHash; keys are small integers):
//!
//! - `vertex`: `(Cell, Timestep) → AgentId` for every entry of every stored
//!   trajectory.  Answers "who is here at `t`" and, by looking up two
//!   entries, "did someone make the opposite move".
//! - `parked`: `Cell → ParkedAgent` for every agent that has finished.  A
//!   parked agent is one entry no matter how long later agents plan.
//!
//! Parked agents never move, so they can block a vertex but never take part
//! in a swap.

use rustc_hash::FxHashMap;

use mapf_core::{AgentId, Cell, ParkedAgent, Timestep, Trajectory};

/// Read-only space-time occupancy of previously planned agents.
#[derive(Debug, Default, Clone)]
pub struct ConstraintStore {
    vertex:        FxHashMap<(Cell, Timestep), AgentId>,
    parked:        FxHashMap<Cell, ParkedAgent>,
    trajectories:  usize,
    latest_finish: Timestep,
}

impl ConstraintStore {
    /// A store with no reservations (the first agent's view).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index `trajectories` and `parked`.
    ///
    /// Time complexity: O(total trajectory length + parked agents).
    pub fn build(trajectories: &[Trajectory], parked: &[ParkedAgent]) -> Self {
        let total: usize = trajectories.iter().map(Trajectory::len).sum();
        let mut vertex =
            FxHashMap::with_capacity_and_hasher(total, Default::default());
        let mut latest_finish = Timestep::ZERO;

        for tr in trajectories {
            for (t, cell) in tr.iter() {
                // Committed plans are conflict-free, so the first claim is
                // the only claim.
                vertex.entry((cell, t)).or_insert(tr.agent);
            }
            latest_finish = latest_finish.max(tr.finish_time());
        }

        let mut parked_by_cell: FxHashMap<Cell, ParkedAgent> =
            FxHashMap::with_capacity_and_hasher(parked.len(), Default::default());
        for p in parked {
            parked_by_cell
                .entry(p.cell)
                .and_modify(|cur| {
                    if p.since < cur.since {
                        *cur = *p;
                    }
                })
                .or_insert(*p);
        }

        Self {
            vertex,
            parked: parked_by_cell,
            trajectories: trajectories.len(),
            latest_finish,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The agent occupying `cell` at `t`, if any.
    ///
    /// Trajectory entries win over parked agents; in a consistent store the
    /// two never overlap.
    #[inline]
    pub fn occupant(&self, cell: Cell, t: Timestep) -> Option<AgentId> {
        if let Some(&agent) = self.vertex.get(&(cell, t)) {
            return Some(agent);
        }
        self.parked
            .get(&cell)
            .filter(|p| p.blocks(cell, t))
            .map(|p| p.agent)
    }

    /// `true` if some prior agent is at `cell` at `t`, in transit or parked.
    #[inline]
    pub fn occupied(&self, cell: Cell, t: Timestep) -> bool {
        self.occupant(cell, t).is_some()
    }

    /// `true` if moving `from → to` between `t` and `t + 1` would swap
    /// places with a prior agent moving `to → from` in the same interval.
    ///
    /// Waiting (`from == to`) can never swap.
    #[inline]
    pub fn conflicts_edge(&self, from: Cell, to: Cell, t: Timestep) -> bool {
        if from == to {
            return false;
        }
        match (self.vertex.get(&(to, t)), self.vertex.get(&(from, t.next()))) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    // ── Summary ───────────────────────────────────────────────────────────

    /// Latest finish time among the stored trajectories.
    #[inline]
    pub fn latest_finish(&self) -> Timestep {
        self.latest_finish
    }

    /// Number of trajectories indexed.
    #[inline]
    pub fn trajectory_count(&self) -> usize {
        self.trajectories
    }

    /// Number of parked reservations.
    #[inline]
    pub fn parked_count(&self) -> usize {
        self.parked.len()
    }

    /// `true` if nothing is reserved at all.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.parked.is_empty()
    }
}
