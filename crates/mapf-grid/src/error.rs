//! Grid error type.

use thiserror::Error;

/// Errors produced by `mapf-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("map parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("grid has no cells ({rows}x{cols})")]
    Empty { rows: u32, cols: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
