//! `mapf-search`: single-agent search where *when* is part of the state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`search`]  | `SpaceTimeSearch` trait, `SearchRequest`, `SearchOutcome`         |
//! | [`astar`]   | `SpaceTimeAStar`, the default implementation                      |
//! | [`scratch`] | `SearchScratch` (state arena + frontier), `SearchState`, `StateId`|
//! | [`path`]    | `extract_path`: walk parent handles back to the root              |
//!
//! # Search graph
//!
//! ```text
//! (cell, t) ──wait──────────────▶ (cell, t+1)
//! (cell, t) ──move to neighbour─▶ (next, t+1)      cost 1 each
//! ```
//!
//! A successor is dropped if a prior agent occupies it at `t+1` or if the
//! move would swap places with a prior agent.  The goal only counts once
//! `t >= horizon`; reaching it earlier is an ordinary pass-through.

pub mod astar;
pub mod path;
pub mod scratch;
pub mod search;


pub use astar::SpaceTimeAStar;
pub use path::extract_path;
pub use scratch::{SearchScratch, SearchState, StateId};
pub use search::{AbortReason, SearchOutcome, SearchRequest, SpaceTimeSearch};
