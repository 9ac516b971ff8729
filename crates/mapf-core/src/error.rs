//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they surface configuration problems.

use thiserror::Error;

use crate::AgentId;

/// Errors produced by `mapf-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("trajectory of {agent} has no cells")]
    EmptyTrajectory { agent: AgentId },
}

/// Shorthand result type for `mapf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
