//! `mapf-planner`: prioritized multi-agent path planning.
//!
//! # Per-agent loop
//!
//! ```text
//! horizon = 0
//! for agent in priority order:
//!   ① Reset      grid.reset_scratch(); scratch.clear()
//!   ② Constrain  ConstraintStore::build(committed trajectories, parked agents)
//!   ③ Search     SpaceTimeSearch::search(start, goal, horizon, bias)
//!   ④ Commit     Found     → trajectory + ParkedAgent at (goal, finish),
//!                            horizon = max(horizon, finish)
//!                otherwise → Blocked(reason); continue or stop per FailurePolicy
//! ```
//!
//! The first agent searches with `config.initial_bias`, every later agent
//! with `config.subsequent_bias`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mapf_core::{Cell, PlannerConfig};
//! use mapf_grid::GridMap;
//! use mapf_planner::{NoopObserver, PlannerBuilder};
//!
//! let grid = GridMap::open(8, 8);
//! let mut planner = PlannerBuilder::with_astar(PlannerConfig::default(), grid)
//!     .agents(vec![Cell::new(0, 0), Cell::new(7, 7)], vec![Cell::new(7, 7), Cell::new(0, 0)])
//!     .build()?;
//! let report = planner.plan(&mut NoopObserver)?;
//! assert!(report.all_succeeded());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod report;


pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{Planner, plan};
pub use report::{AgentOutcome, BlockReason, PlanReport};
