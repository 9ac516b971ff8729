//! The pluggable search interface.
//!
//! # Pluggability
//!
//! `mapf-planner` calls the single-agent search through the
//! [`SpaceTimeSearch`] trait, so applications can swap in their own
//! implementation (different heuristic, focal search, …) without touching
//! the orchestrator.  The default [`SpaceTimeAStar`][crate::SpaceTimeAStar]
//! is time-indexed A* with a Manhattan heuristic.

use mapf_constraint::ConstraintStore;
use mapf_core::{Cell, Timestep};
use mapf_grid::Grid;

use crate::{SearchScratch, StateId};

// ── Request / outcome ─────────────────────────────────────────────────────────

/// One agent's search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    pub start:   Cell,
    pub goal:    Cell,
    /// The agent may not finish (park) before this timestep.
    pub horizon: Timestep,
    /// Implementation-defined scoring bias; `0.0` is neutral.
    pub bias:    f32,
}

/// Why a search gave up before exhausting its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Popped this many states without reaching the goal.
    ExpansionLimit(u64),
    /// States past this timestep were discarded and the frontier then ran dry.
    TimestepLimit(Timestep),
    /// The state arena ran out of addressable handles.
    StateLimit,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::ExpansionLimit(n) => write!(f, "expansion limit of {n} reached"),
            AbortReason::TimestepLimit(t)  => write!(f, "timestep limit {t} reached"),
            AbortReason::StateLimit        => f.write_str("state arena full"),
        }
    }
}

/// Result of one search call.
///
/// Failure is a value, not an error: a blocked agent is an expected outcome
/// the planner recovers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `goal` is the solved state's handle in the scratch arena; pass it to
    /// [`extract_path`][crate::extract_path].
    Found { goal: StateId, expansions: u64 },
    /// The frontier emptied: no conflict-free path exists.
    Exhausted { expansions: u64 },
    /// A cap cut the search short; a path may still exist.
    Aborted { reason: AbortReason, expansions: u64 },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// States popped from the frontier.
    pub fn expansions(&self) -> u64 {
        match *self {
            SearchOutcome::Found { expansions, .. }
            | SearchOutcome::Exhausted { expansions }
            | SearchOutcome::Aborted { expansions, .. } => expansions,
        }
    }
}

// ── SpaceTimeSearch trait ─────────────────────────────────────────────────────

/// Pluggable single-agent space-time search.
///
/// Implementations must:
///
/// - start from `(request.start, t = 0)`;
/// - never produce a state that `constraints` reports occupied, nor a move
///   that `constraints` reports as a swap;
/// - only report `Found` for a state at `request.goal` with
///   `t >= request.horizon`;
/// - leave the solved chain in `scratch` so the planner can extract it.
///
/// `scratch` arrives cleared; implementations may use it however they like.
pub trait SpaceTimeSearch {
    fn search<G: Grid>(
        &self,
        grid:        &G,
        constraints: &ConstraintStore,
        request:     &SearchRequest,
        scratch:     &mut SearchScratch,
    ) -> SearchOutcome;
}
