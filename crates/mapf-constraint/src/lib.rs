//! `mapf-constraint`: which space-time cells other agents have claimed.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`store`]  | `ConstraintStore`: vertex / swap / parking occupancy queries  |
//! | [`verify`] | `find_conflicts`, `Conflict`: audit a finished plan           |
//!
//! A store is a read-only view: the planner rebuilds it from scratch for
//! every agent rather than patching it, so no reservation can survive from
//! one agent's search into the next.

pub mod store;
pub mod verify;

#[cfg(test)]
mod tests;

pub use store::ConstraintStore;
pub use verify::{Conflict, find_conflicts};
