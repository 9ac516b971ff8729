//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectories.csv`
//! - `agents.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, OutputResult, TrajectoryRow};

/// Writes plan output to two CSV files.
pub struct CsvWriter {
    trajectories: Writer<File>,
    agents:       Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(["agent_id", "timestep", "row", "col"])?;

        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(["agent_id", "priority", "status", "finish_time", "moves", "waits"])?;

        Ok(Self {
            trajectories,
            agents,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.agent_id.to_string(),
                row.timestep.to_string(),
                row.row.to_string(),
                row.col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_agent_summary(&mut self, row: &AgentSummaryRow) -> OutputResult<()> {
        self.agents.write_record(&[
            row.agent_id.to_string(),
            row.priority.to_string(),
            row.status.to_string(),
            row.finish_time.map(|t| t.to_string()).unwrap_or_default(),
            row.moves.to_string(),
            row.waits.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectories.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
