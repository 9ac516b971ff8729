//! Plain data row types written by output backends.

use mapf_core::{AgentId, Trajectory};
use mapf_planner::AgentOutcome;

/// One agent's position at one timestep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryRow {
    pub agent_id: u32,
    pub timestep: u32,
    pub row:      u32,
    pub col:      u32,
}

impl TrajectoryRow {
    /// One row per entry of `trajectory`, in timestep order.
    pub fn rows_for(trajectory: &Trajectory) -> Vec<TrajectoryRow> {
        trajectory
            .iter()
            .map(|(t, cell)| TrajectoryRow {
                agent_id: trajectory.agent.0,
                timestep: t.0,
                row:      cell.row,
                col:      cell.col,
            })
            .collect()
    }
}

/// How one agent fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSummaryRow {
    pub agent_id:    u32,
    /// Position in the priority order; `0` was planned first.
    pub priority:    u32,
    /// `planned`, `blocked` or `skipped`.
    pub status:      &'static str,
    /// `None` unless planned.
    pub finish_time: Option<u32>,
    pub moves:       u32,
    pub waits:       u32,
}

impl AgentSummaryRow {
    pub fn new(agent: AgentId, priority: usize, outcome: &AgentOutcome) -> Self {
        let trajectory = outcome.trajectory();
        Self {
            agent_id:    agent.0,
            priority:    priority as u32,
            status:      outcome.status(),
            finish_time: trajectory.map(|tr| tr.finish_time().0),
            moves:       trajectory.map_or(0, |tr| tr.move_count() as u32),
            waits:       trajectory.map_or(0, |tr| tr.wait_count() as u32),
        }
    }
}
