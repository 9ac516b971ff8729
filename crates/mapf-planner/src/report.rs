//! Per-agent results of a planning run.

use std::fmt;

use mapf_core::{AgentId, Timestep, Trajectory};
use mapf_search::AbortReason;

// ── BlockReason ───────────────────────────────────────────────────────────────

/// Why an agent got no trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// No conflict-free path exists given the agents planned before it.
    Exhausted,
    /// A search cap cut the search short; a path may exist.
    Aborted(AbortReason),
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::Exhausted => f.write_str("no conflict-free path"),
            BlockReason::Aborted(reason) => write!(f, "search aborted: {reason}"),
        }
    }
}

// ── AgentOutcome ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    Planned(Trajectory),
    Blocked(BlockReason),
    /// Never searched: an earlier agent failed under `FailurePolicy::Abort`.
    Skipped,
}

impl AgentOutcome {
    #[inline]
    pub fn is_planned(&self) -> bool {
        matches!(self, AgentOutcome::Planned(_))
    }

    #[inline]
    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            AgentOutcome::Planned(tr) => Some(tr),
            _ => None,
        }
    }

    /// Short lowercase label for tables and logs.
    pub fn status(&self) -> &'static str {
        match self {
            AgentOutcome::Planned(_) => "planned",
            AgentOutcome::Blocked(_) => "blocked",
            AgentOutcome::Skipped    => "skipped",
        }
    }
}

// ── PlanReport ────────────────────────────────────────────────────────────────

/// Everything a planning run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    /// One entry per agent, indexed by `AgentId`.
    pub outcomes: Vec<AgentOutcome>,
    /// The priority order that was used.
    pub order: Vec<AgentId>,
    /// Latest finish time among planned agents.
    pub final_horizon: Timestep,
    /// States expanded across all searches.
    pub expansions: u64,
}

impl PlanReport {
    pub fn agent_count(&self) -> usize {
        self.outcomes.len()
    }

    /// `true` if every agent got a trajectory.  An empty plan succeeds.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(AgentOutcome::is_planned)
    }

    pub fn outcome(&self, agent: AgentId) -> Option<&AgentOutcome> {
        self.outcomes.get(agent.index())
    }

    pub fn trajectory(&self, agent: AgentId) -> Option<&Trajectory> {
        self.outcome(agent).and_then(AgentOutcome::trajectory)
    }

    /// Committed trajectories in priority order.
    pub fn trajectories(&self) -> impl Iterator<Item = &Trajectory> + '_ {
        self.order.iter().filter_map(|&agent| self.trajectory(agent))
    }

    /// Blocked agents and their reasons, in priority order.
    pub fn blocked(&self) -> impl Iterator<Item = (AgentId, BlockReason)> + '_ {
        self.order.iter().filter_map(|&agent| match self.outcome(agent) {
            Some(AgentOutcome::Blocked(reason)) => Some((agent, *reason)),
            _ => None,
        })
    }

    /// Position of `agent` in the priority order.
    pub fn rank_of(&self, agent: AgentId) -> Option<usize> {
        self.order.iter().position(|&a| a == agent)
    }

    /// Sum of finish times over planned agents.
    pub fn sum_of_costs(&self) -> u64 {
        self.trajectories().map(|tr| tr.finish_time().0 as u64).sum()
    }

    /// Latest finish time over planned agents.
    pub fn makespan(&self) -> Timestep {
        self.trajectories()
            .map(Trajectory::finish_time)
            .max()
            .unwrap_or(Timestep::ZERO)
    }

    /// Consume the report, keeping only the trajectories (priority order).
    pub fn into_trajectories(mut self) -> Vec<Trajectory> {
        let mut out = Vec::with_capacity(self.outcomes.len());
        for agent in &self.order {
            let slot = &mut self.outcomes[agent.index()];
            if let AgentOutcome::Planned(tr) = std::mem::replace(slot, AgentOutcome::Skipped) {
                out.push(tr);
            }
        }
        out
    }
}
