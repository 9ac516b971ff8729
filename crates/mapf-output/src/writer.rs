//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSummaryRow, OutputResult, TrajectoryRow};

/// Sink for plan output.
///
/// [`PlanOutputObserver`][crate::PlanOutputObserver] never propagates these
/// errors through the planner; it stores the first one for
/// [`take_error`][crate::PlanOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one agent's trajectory, one row per timestep.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write one agent's summary row.
    fn write_agent_summary(&mut self, row: &AgentSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
