//! `mapf-core`: foundational types for the prioritized multi-agent planner.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It has no
//! `mapf-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `AgentId`, the `typed_id!` macro                       |
//! | [`cell`]       | `Cell`, Manhattan distance                             |
//! | [`time`]       | `Timestep`                                             |
//! | [`trajectory`] | `Trajectory`, `ParkedAgent`                            |
//! | [`config`]     | `PlannerConfig`, `FailurePolicy`, `PlanningContext`    |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;
pub mod trajectory;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{FailurePolicy, PlannerConfig, PlanningContext};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use time::Timestep;
pub use trajectory::{ParkedAgent, Trajectory};
