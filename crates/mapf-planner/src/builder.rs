//! Fluent builder for constructing a [`Planner`].

use rustc_hash::FxHashMap;

use mapf_core::{AgentId, Cell, PlannerConfig};
use mapf_grid::Grid;
use mapf_search::{SearchScratch, SpaceTimeAStar, SpaceTimeSearch};

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner<G, S>`].
///
/// # Required inputs
///
/// - [`PlannerConfig`]: biases, failure policy, search caps
/// - `G: Grid`: the static map
/// - `S: SpaceTimeSearch`: the single-agent search (e.g. [`SpaceTimeAStar`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.agents(s, g)`   | No agents                        |
/// | `.order(v)`       | Input order: `AgentId(0)`, `1`, … |
///
/// `build` validates everything up front, so a `Planner` never starts a
/// search it cannot finish meaningfully.
///
/// # Example
///
/// ```rust,ignore
/// let mut planner = PlannerBuilder::with_astar(config, grid)
///     .agents(starts, goals)
///     .order(vec![AgentId(2), AgentId(0), AgentId(1)])
///     .build()?;
/// let report = planner.plan(&mut NoopObserver)?;
/// ```
pub struct PlannerBuilder<G: Grid, S: SpaceTimeSearch> {
    config: PlannerConfig,
    grid:   G,
    search: S,
    starts: Vec<Cell>,
    goals:  Vec<Cell>,
    order:  Option<Vec<AgentId>>,
}

impl<G: Grid> PlannerBuilder<G, SpaceTimeAStar> {
    /// Builder using the default search, with caps taken from `config`.
    pub fn with_astar(config: PlannerConfig, grid: G) -> Self {
        let search = SpaceTimeAStar::from_config(&config);
        Self::new(config, grid, search)
    }
}

impl<G: Grid, S: SpaceTimeSearch> PlannerBuilder<G, S> {
    /// Create a builder with all required inputs.
    pub fn new(config: PlannerConfig, grid: G, search: S) -> Self {
        Self {
            config,
            grid,
            search,
            starts: Vec::new(),
            goals:  Vec::new(),
            order:  None,
        }
    }

    /// Agent `i` starts at `starts[i]` and must end at `goals[i]`.
    pub fn agents(mut self, starts: Vec<Cell>, goals: Vec<Cell>) -> Self {
        self.starts = starts;
        self.goals = goals;
        self
    }

    /// Priority order: `order[0]` is planned first.  Must be a permutation
    /// of the agent ids.
    pub fn order(mut self, order: Vec<AgentId>) -> Self {
        self.order = Some(order);
        self
    }

    /// Validate inputs and return a ready-to-run [`Planner`].
    pub fn build(self) -> PlanResult<Planner<G, S>> {
        self.config.validate()?;

        let (rows, cols) = self.grid.dimensions();
        if rows == 0 || cols == 0 {
            return Err(PlanError::DegenerateGrid { rows, cols });
        }

        let agent_count = self.starts.len();
        if self.goals.len() != agent_count {
            return Err(PlanError::AgentCountMismatch {
                expected: agent_count,
                got:      self.goals.len(),
                what:     "goals",
            });
        }

        // ── Endpoints ─────────────────────────────────────────────────────
        check_endpoints(&self.grid, &self.starts, "start")?;
        check_endpoints(&self.grid, &self.goals, "goal")?;

        // ── Priority order ────────────────────────────────────────────────
        let order = match self.order {
            Some(order) => {
                check_order(&order, agent_count)?;
                order
            }
            None => (0..agent_count as u32).map(AgentId).collect(),
        };

        Ok(Planner {
            config:  self.config,
            grid:    self.grid,
            search:  self.search,
            starts:  self.starts,
            goals:   self.goals,
            order,
            scratch: SearchScratch::new(),
        })
    }
}

/// Every cell on the grid, passable, and used by at most one agent.
fn check_endpoints<G: Grid>(grid: &G, cells: &[Cell], what: &'static str) -> PlanResult<()> {
    let mut owners: FxHashMap<Cell, AgentId> =
        FxHashMap::with_capacity_and_hasher(cells.len(), Default::default());

    for (i, &cell) in cells.iter().enumerate() {
        let agent = AgentId(i as u32);
        if !grid.contains(cell) {
            return Err(PlanError::OffGrid { agent, cell, what });
        }
        if !grid.passable(cell) {
            return Err(PlanError::Impassable { agent, cell, what });
        }
        if let Some(&first) = owners.get(&cell) {
            return Err(PlanError::DuplicateCell { cell, what, first, second: agent });
        }
        owners.insert(cell, agent);
    }
    Ok(())
}

fn check_order(order: &[AgentId], agent_count: usize) -> PlanResult<()> {
    if order.len() != agent_count {
        return Err(PlanError::AgentCountMismatch {
            expected: agent_count,
            got:      order.len(),
            what:     "priority order",
        });
    }
    let mut seen = vec![false; agent_count];
    for &agent in order {
        match seen.get_mut(agent.index()) {
            None => {
                return Err(PlanError::InvalidOrder(format!(
                    "{agent} is out of range for {agent_count} agents"
                )));
            }
            Some(true) => {
                return Err(PlanError::InvalidOrder(format!("{agent} appears twice")));
            }
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}
