//! The `Planner` struct and its per-agent loop.

use mapf_constraint::ConstraintStore;
use mapf_core::{
    AgentId, Cell, FailurePolicy, ParkedAgent, PlannerConfig, PlanningContext, Timestep, Trajectory,
};
use mapf_grid::Grid;
use mapf_search::{SearchOutcome, SearchRequest, SearchScratch, SpaceTimeSearch, StateId, extract_path};

use crate::{
    AgentOutcome, BlockReason, NoopObserver, PlanError, PlanObserver, PlanReport, PlanResult,
    PlannerBuilder,
};

/// Prioritized planner.
///
/// Agents are planned one at a time in priority order.  For each agent:
///
/// 1. **Reset**: the grid's scratch state and the search scratch are cleared.
/// 2. **Constrain**: a [`ConstraintStore`] is built from every trajectory
///    committed so far plus the parking spot of every finished agent.
/// 3. **Search**: the [`SpaceTimeSearch`] runs with the current horizon and
///    bias.  The agent may not park before the horizon, so every earlier
///    agent is parked by the time it does.
/// 4. **Commit** (on success): the path becomes a [`Trajectory`], the agent
///    is parked on its goal, and the horizon rises to its finish time.
/// 5. **Block** (on failure): the agent is recorded with a [`BlockReason`];
///    planning continues or stops according to [`FailurePolicy`].
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<G: Grid, S: SpaceTimeSearch> {
    /// Biases, failure policy, caps.
    pub config: PlannerConfig,

    pub(crate) grid:    G,
    pub(crate) search:  S,
    pub(crate) starts:  Vec<Cell>,
    pub(crate) goals:   Vec<Cell>,
    pub(crate) order:   Vec<AgentId>,
    pub(crate) scratch: SearchScratch,
}

impl<G: Grid, S: SpaceTimeSearch> Planner<G, S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.starts.len()
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn starts(&self) -> &[Cell] {
        &self.starts
    }

    pub fn goals(&self) -> &[Cell] {
        &self.goals
    }

    pub fn order(&self) -> &[AgentId] {
        &self.order
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Plan every agent in priority order.
    ///
    /// Returns `Ok` whenever the loop ran to completion, even if some agents
    /// were blocked; check [`PlanReport::all_succeeded`].  `Err` means the
    /// search broke its contract (see [`PlanError::BadPath`]).
    ///
    /// Planning is deterministic: calling `plan` again yields an identical
    /// report.
    pub fn plan<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<PlanReport> {
        let agent_count = self.agent_count();
        let mut ctx = PlanningContext::new(self.config.initial_bias);
        let mut outcomes = vec![AgentOutcome::Skipped; agent_count];
        let mut committed: Vec<Trajectory> = Vec::with_capacity(agent_count);
        let mut parked: Vec<ParkedAgent> = Vec::with_capacity(agent_count);
        let mut expansions: u64 = 0;

        for rank in 0..self.order.len() {
            let agent = self.order[rank];
            ctx.bias = self.config.bias_for_rank(rank);
            observer.on_agent_start(agent, &ctx);

            // ── Reset per-agent scratch ───────────────────────────────────
            self.grid.reset_scratch();
            self.scratch.clear();

            // ── Search against everything committed so far ────────────────
            let store = ConstraintStore::build(&committed, &parked);
            tracing::debug!(
                %agent,
                reserved = store.trajectory_count(),
                parked = store.parked_count(),
                latest_finish = %store.latest_finish(),
                "constraints built"
            );
            let request = SearchRequest {
                start:   self.starts[agent.index()],
                goal:    self.goals[agent.index()],
                horizon: ctx.horizon,
                bias:    ctx.bias,
            };
            let outcome = self.search.search(&self.grid, &store, &request, &mut self.scratch);
            expansions += outcome.expansions();
            tracing::debug!(
                %agent,
                rank,
                horizon = %ctx.horizon,
                bias = ctx.bias,
                expansions = outcome.expansions(),
                "searched"
            );

            let reason = match outcome {
                SearchOutcome::Found { goal, .. } => {
                    let trajectory = self.checked_trajectory(agent, goal, &request, &store)?;
                    ctx.raise_horizon(trajectory.finish_time());
                    tracing::info!(
                        %agent,
                        finish = %trajectory.finish_time(),
                        moves = trajectory.move_count(),
                        waits = trajectory.wait_count(),
                        horizon = %ctx.horizon,
                        "trajectory committed"
                    );
                    observer.on_agent_planned(agent, &trajectory, ctx.horizon);
                    parked.push(ParkedAgent::from_trajectory(&trajectory));
                    committed.push(trajectory);
                    continue;
                }
                SearchOutcome::Exhausted { .. } => BlockReason::Exhausted,
                SearchOutcome::Aborted { reason, .. } => BlockReason::Aborted(reason),
            };

            tracing::warn!(
                %agent,
                rank,
                start = %request.start,
                goal = %request.goal,
                %reason,
                "agent blocked"
            );
            observer.on_agent_blocked(agent, &reason);
            outcomes[agent.index()] = AgentOutcome::Blocked(reason);
            if self.config.failure_policy == FailurePolicy::Abort {
                break;
            }
        }

        for trajectory in committed {
            let slot = trajectory.agent.index();
            outcomes[slot] = AgentOutcome::Planned(trajectory);
        }

        let report = PlanReport {
            outcomes,
            order: self.order.clone(),
            final_horizon: ctx.horizon,
            expansions,
        };
        observer.on_plan_end(&report);
        Ok(report)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Extract the solved path and make sure it is one this planner can
    /// commit: right endpoints, contiguous, parked no earlier than the
    /// horizon, and clear of every reservation.
    fn checked_trajectory(
        &self,
        agent:   AgentId,
        goal:    StateId,
        request: &SearchRequest,
        store:   &ConstraintStore,
    ) -> PlanResult<Trajectory> {
        let bad = |reason: String| PlanError::BadPath { agent, reason };

        if goal.index() >= self.scratch.len() {
            return Err(bad(format!("{goal} is not in the search arena")));
        }
        let cells = extract_path(self.scratch.states(), goal);
        let trajectory = Trajectory::new(agent, cells).ok_or_else(|| bad("empty path".into()))?;

        if trajectory.start() != request.start || trajectory.goal() != request.goal {
            return Err(bad(format!(
                "path runs {} -> {}, expected {} -> {}",
                trajectory.start(),
                trajectory.goal(),
                request.start,
                request.goal
            )));
        }
        if trajectory.finish_time() < request.horizon {
            return Err(bad(format!(
                "finishes at {} before the horizon {}",
                trajectory.finish_time(),
                request.horizon
            )));
        }
        for (t, cell) in trajectory.iter() {
            if store.occupied(cell, t) {
                return Err(bad(format!("enters reserved cell {cell} at {t}")));
            }
        }
        for (t, pair) in trajectory.cells().windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let t = Timestep(t as u32);
            if from != to && !from.is_adjacent(to) {
                return Err(bad(format!("jumps {from} -> {to} at {t}")));
            }
            if store.conflicts_edge(from, to, t) {
                return Err(bad(format!("swaps {from} <-> {to} at {t}")));
            }
        }
        Ok(trajectory)
    }
}

/// Plan `starts[i] → goals[i]` for every agent in one call.
///
/// `order` defaults to input order.  Shorthand for building a [`Planner`]
/// and running it with a [`NoopObserver`].
pub fn plan<G: Grid, S: SpaceTimeSearch>(
    grid:   G,
    starts: Vec<Cell>,
    goals:  Vec<Cell>,
    order:  Option<Vec<AgentId>>,
    search: S,
    config: PlannerConfig,
) -> PlanResult<PlanReport> {
    let mut builder = PlannerBuilder::new(config, grid, search).agents(starts, goals);
    if let Some(order) = order {
        builder = builder.order(order);
    }
    builder.build()?.plan(&mut NoopObserver)
}
