//! Planner observer trait for progress reporting and result collection.

use mapf_core::{AgentId, PlanningContext, Timestep, Trajectory};

use crate::{BlockReason, PlanReport};

/// Callbacks invoked by [`Planner::plan`][crate::Planner::plan] as agents are
/// planned.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl PlanObserver for Progress {
///     fn on_agent_planned(&mut self, agent: AgentId, tr: &Trajectory, horizon: Timestep) {
///         println!("{agent}: {} steps, horizon now {horizon}", tr.finish_time().0);
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called before an agent's search, with the horizon and bias it will
    /// receive.
    fn on_agent_start(&mut self, _agent: AgentId, _ctx: &PlanningContext) {}

    /// Called after an agent's trajectory is committed.  `horizon` is the
    /// planner horizon after committing it.
    fn on_agent_planned(&mut self, _agent: AgentId, _trajectory: &Trajectory, _horizon: Timestep) {}

    /// Called when an agent's search fails.
    fn on_agent_blocked(&mut self, _agent: AgentId, _reason: &BlockReason) {}

    /// Called once after the last agent, with the finished report.
    fn on_plan_end(&mut self, _report: &PlanReport) {}
}

/// A [`PlanObserver`] that does nothing.  Use when you need to call `plan` but
/// don't want callbacks.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
