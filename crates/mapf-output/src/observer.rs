//! `PlanOutputObserver<W>`: bridges `PlanObserver` to an `OutputWriter`.

use mapf_core::{AgentId, Timestep, Trajectory};
use mapf_planner::{PlanObserver, PlanReport};

use crate::row::{AgentSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that writes every committed trajectory as soon as it
/// is planned, then one summary row per agent when planning ends.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `planner.plan()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `planner.plan()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after planning).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_agent_planned(&mut self, _agent: AgentId, trajectory: &Trajectory, _horizon: Timestep) {
        let rows = TrajectoryRow::rows_for(trajectory);
        let result = self.writer.write_trajectory(&rows);
        self.store_err(result);
    }

    fn on_plan_end(&mut self, report: &PlanReport) {
        for (rank, &agent) in report.order.iter().enumerate() {
            let Some(outcome) = report.outcome(agent) else { continue };
            let row = AgentSummaryRow::new(agent, rank, outcome);
            let result = self.writer.write_agent_summary(&row);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
