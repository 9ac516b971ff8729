//! Committed agent paths and their permanent tail reservations.

use crate::{AgentId, Cell, Timestep};
#[cfg(feature = "serde")]
use crate::CoreError;

// ── Trajectory ────────────────────────────────────────────────────────────────

/// One agent's committed path: `cells[t]` is where the agent stands at
/// timestep `t`, waits included.
///
/// A trajectory is never empty and is never mutated after the planner
/// commits it.  Deserialization goes through [`Trajectory::new`] and fails
/// on an empty cell list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TrajectoryRepr"))]
pub struct Trajectory {
    pub agent: AgentId,
    cells: Vec<Cell>,
}

/// Unchecked wire shape of a [`Trajectory`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TrajectoryRepr {
    agent: AgentId,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<TrajectoryRepr> for Trajectory {
    type Error = CoreError;

    fn try_from(repr: TrajectoryRepr) -> Result<Self, CoreError> {
        let TrajectoryRepr { agent, cells } = repr;
        Trajectory::new(agent, cells).ok_or(CoreError::EmptyTrajectory { agent })
    }
}

impl Trajectory {
    /// Wrap a cell sequence.  Returns `None` for an empty sequence.
    pub fn new(agent: AgentId, cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self { agent, cells })
    }

    /// Position at `t`, or `None` once the trajectory has ended.
    #[inline]
    pub fn at(&self, t: Timestep) -> Option<Cell> {
        self.cells.get(t.index()).copied()
    }

    /// Position at `t`, holding the final cell forever after the end.
    #[inline]
    pub fn at_or_parked(&self, t: Timestep) -> Cell {
        self.at(t).unwrap_or_else(|| self.goal())
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of timesteps covered, including `t = 0`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Timestep of the last entry (`len - 1`).  Also the plan's cost.
    #[inline]
    pub fn finish_time(&self) -> Timestep {
        Timestep((self.cells.len() - 1) as u32)
    }

    /// Steps where the agent changed cell.
    pub fn move_count(&self) -> usize {
        self.cells.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Steps where the agent stayed put.
    pub fn wait_count(&self) -> usize {
        self.cells.len() - 1 - self.move_count()
    }

    /// Iterator over `(timestep, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Timestep, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(t, &c)| (Timestep(t as u32), c))
    }
}

// ── ParkedAgent ───────────────────────────────────────────────────────────────

/// "This agent occupies `cell` at every timestep `>= since`, forever."
///
/// Collapses the unbounded tail of a finished trajectory into one record so
/// occupancy checks stay O(1) no matter how far later agents plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkedAgent {
    pub agent: AgentId,
    pub cell:  Cell,
    pub since: Timestep,
}

impl ParkedAgent {
    /// Park at the trajectory's last cell from its last timestep onward.
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            agent: trajectory.agent,
            cell:  trajectory.goal(),
            since: trajectory.finish_time(),
        }
    }

    /// `true` if the parked agent blocks `cell` at `t`.
    #[inline]
    pub fn blocks(&self, cell: Cell, t: Timestep) -> bool {
        self.cell == cell && self.since <= t
    }
}
