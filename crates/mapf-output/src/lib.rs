//! `mapf-output`: plan output writers.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `trajectories.csv`, `agents.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`PlanOutputObserver`], which implements `mapf_planner::PlanObserver`.
//! `trajectories.csv` is written agent by agent in priority order as each
//! trajectory is committed; `agents.csv` has one row per agent, also in
//! priority order, written when planning ends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapf_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PlanOutputObserver::new(writer);
//! let report = planner.plan(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{AgentSummaryRow, TrajectoryRow};
pub use writer::OutputWriter;
