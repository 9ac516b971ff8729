use mapf_core::{AgentId, Cell, CoreError};
use mapf_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("grid has no cells ({rows}x{cols})")]
    DegenerateGrid { rows: u32, cols: u32 },

    #[error("{what} {cell} of {agent} lies outside the grid")]
    OffGrid {
        agent: AgentId,
        cell:  Cell,
        what:  &'static str,
    },

    #[error("{what} {cell} of {agent} is an obstacle")]
    Impassable {
        agent: AgentId,
        cell:  Cell,
        what:  &'static str,
    },

    #[error("{first} and {second} share the {what} {cell}")]
    DuplicateCell {
        cell:   Cell,
        what:   &'static str,
        first:  AgentId,
        second: AgentId,
    },

    #[error("priority order is not a permutation of the agent ids: {0}")]
    InvalidOrder(String),

    #[error("search returned an unusable path for {agent}: {reason}")]
    BadPath { agent: AgentId, reason: String },
}

pub type PlanResult<T> = Result<T, PlanError>;
