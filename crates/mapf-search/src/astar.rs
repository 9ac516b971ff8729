//! Time-indexed A*, the default [`SpaceTimeSearch`].
//!
//! # Bias
//!
//! The request's `bias` inflates the heuristic (weighted A*):
//!
//! ```text
//! priority = 1000·g + round(1000·(1 + bias))·h
//! ```
//!
//! Keys are integers so ordering is exact and runs are reproducible.  With
//! `bias = 0` this is plain A* and paths are optimal; a positive bias makes
//! the search greedier, expanding fewer states at the price of paths at most
//! `(1 + bias)` times the optimum.  Negative or non-finite biases are treated
//! as `0`.  Constraints are enforced the same way regardless of bias.
//!
//! # Termination
//!
//! Once `t >= horizon` every earlier agent is parked, so the world is static
//! and anything reachable is reached within `cell_count` more steps.  States
//! beyond `horizon + cell_count` are dropped, which keeps the state space
//! finite: when the frontier empties the agent is genuinely blocked.
//! The configurable caps report `Aborted` instead, since a path might exist
//! beyond them.

use std::iter;

use mapf_constraint::ConstraintStore;
use mapf_core::{PlannerConfig, Timestep};
use mapf_grid::{Grid, reachable};

use crate::{
    AbortReason, SearchOutcome, SearchRequest, SearchScratch, SearchState, SpaceTimeSearch,
};

/// Fixed-point scale for priority keys.
const SCALE: u64 = 1_000;

/// Time-indexed A* with a Manhattan heuristic, wait moves, and optional caps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceTimeAStar {
    /// Give up after popping this many states.
    pub max_expansions: Option<u64>,
    /// Never generate states after this timestep.
    pub max_timestep:   Option<Timestep>,
}

impl SpaceTimeAStar {
    /// Uncapped search (still finite; see the module docs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the caps from a planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            max_expansions: config.max_expansions,
            max_timestep:   config.max_timestep,
        }
    }

    pub fn with_max_expansions(mut self, n: u64) -> Self {
        self.max_expansions = Some(n);
        self
    }

    pub fn with_max_timestep(mut self, t: Timestep) -> Self {
        self.max_timestep = Some(t);
        self
    }
}

/// Fixed-point heuristic weight for `bias`.
#[inline]
fn heuristic_weight(bias: f32) -> u64 {
    let bias = if bias.is_finite() { bias.max(0.0) } else { 0.0 };
    ((1.0 + bias as f64) * SCALE as f64).round() as u64
}

#[inline]
fn priority(g: u32, h: u32, weight: u64) -> u64 {
    SCALE * g as u64 + weight * h as u64
}

impl SpaceTimeSearch for SpaceTimeAStar {
    fn search<G: Grid>(
        &self,
        grid:        &G,
        constraints: &ConstraintStore,
        request:     &SearchRequest,
        scratch:     &mut SearchScratch,
    ) -> SearchOutcome {
        let SearchRequest { start, goal, horizon, bias } = *request;
        scratch.clear();

        // Someone parked on our start at t0, or the map itself separates
        // start and goal: nothing to search.
        if constraints.occupied(start, Timestep::ZERO) || !reachable(grid, start, goal) {
            return SearchOutcome::Exhausted { expansions: 0 };
        }

        let weight = heuristic_weight(bias);
        let cells = u32::try_from(grid.cell_count()).unwrap_or(u32::MAX);
        let natural_bound = Timestep(horizon.0.saturating_add(cells));
        let (bound, capped) = match self.max_timestep {
            Some(cap) if cap < natural_bound => (cap, true),
            _ => (natural_bound, false),
        };
        let mut truncated = false;

        let h0 = start.manhattan(goal);
        let Some(root) = scratch.alloc(SearchState::root(start, h0)) else {
            return SearchOutcome::Aborted { reason: AbortReason::StateLimit, expansions: 0 };
        };
        scratch.mark_seen(start, Timestep::ZERO);
        scratch.push_open(priority(0, h0, weight), h0, root);

        let mut expansions: u64 = 0;

        while let Some(id) = scratch.pop_open() {
            let state = *scratch.state(id);

            if state.cell == goal && state.at >= horizon {
                tracing::trace!(%goal, at = %state.at, expansions, "goal reached");
                return SearchOutcome::Found { goal: id, expansions };
            }

            if let Some(max) = self.max_expansions {
                if expansions >= max {
                    return SearchOutcome::Aborted {
                        reason: AbortReason::ExpansionLimit(max),
                        expansions,
                    };
                }
            }
            expansions += 1;

            let next_t = state.at.next();
            if next_t > bound {
                truncated |= capped;
                continue;
            }

            // Wait first, then neighbours in the grid's fixed order.
            for to in iter::once(state.cell).chain(grid.neighbours(state.cell)) {
                if constraints.occupied(to, next_t)
                    || constraints.conflicts_edge(state.cell, to, state.at)
                {
                    continue;
                }
                if !scratch.mark_seen(to, next_t) {
                    continue;
                }
                let h = to.manhattan(goal);
                let child = SearchState::child(id, &state, to, h);
                let Some(child_id) = scratch.alloc(child) else {
                    return SearchOutcome::Aborted { reason: AbortReason::StateLimit, expansions };
                };
                scratch.push_open(priority(child.g, h, weight), h, child_id);
            }
        }

        tracing::trace!(%start, %goal, expansions, truncated, "frontier exhausted");
        if truncated {
            SearchOutcome::Aborted { reason: AbortReason::TimestepLimit(bound), expansions }
        } else {
            SearchOutcome::Exhausted { expansions }
        }
    }
}
