//! `mapf-grid`: the static map the planner moves agents across.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`grid`]       | `Grid` trait: the planner's view of any map              |
//! | [`map`]        | `GridMap` (row-major passability), `GridMapBuilder`       |
//! | [`reach`]      | `reachable`, `distance`: BFS on the static map           |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! The planner only consumes the [`Grid`] trait, so applications with their
//! own map representation (bitsets, tiled maps, …) implement it directly and
//! never touch [`GridMap`].

pub mod error;
pub mod grid;
pub mod map;
pub mod reach;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use map::{GridMap, GridMapBuilder};
pub use reach::{distance, reachable};
