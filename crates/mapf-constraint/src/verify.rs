//! After-the-fact audit of a set of trajectories.
//!
//! Each trajectory is treated as parked on its last cell once it ends, which
//! is exactly how the planner reserves finished agents.  Used by tests and by
//! applications that want to double-check a plan before executing it.

use mapf_core::{AgentId, Cell, Timestep, Trajectory};

/// A collision between two agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conflict {
    /// Both agents at `cell` at `at`.
    Vertex { a: AgentId, b: AgentId, cell: Cell, at: Timestep },
    /// `a` moves `from → to` while `b` moves `to → from`, between `at` and
    /// `at + 1`.
    Edge { a: AgentId, b: AgentId, from: Cell, to: Cell, at: Timestep },
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conflict::Vertex { a, b, cell, at } => {
                write!(f, "{a} and {b} both at {cell} at {at}")
            }
            Conflict::Edge { a, b, from, to, at } => {
                write!(f, "{a} and {b} swap {from} <-> {to} at {at}")
            }
        }
    }
}

/// Every vertex and edge conflict between every pair of `trajectories`.
///
/// O(n² · T) where T is the longest trajectory; meant for verification, not
/// for the planning hot path.
pub fn find_conflicts(trajectories: &[Trajectory]) -> Vec<Conflict> {
    let mut out = Vec::new();
    for (i, ta) in trajectories.iter().enumerate() {
        for tb in &trajectories[i + 1..] {
            pair_conflicts(ta, tb, &mut out);
        }
    }
    out
}

fn pair_conflicts(ta: &Trajectory, tb: &Trajectory, out: &mut Vec<Conflict>) {
    let end = ta.finish_time().max(tb.finish_time());
    let (a, b) = (ta.agent, tb.agent);

    for t in 0..=end.0 {
        let t = Timestep(t);
        let (pa, pb) = (ta.at_or_parked(t), tb.at_or_parked(t));
        if pa == pb {
            out.push(Conflict::Vertex { a, b, cell: pa, at: t });
        }
        if t == end {
            continue;
        }
        let (na, nb) = (ta.at_or_parked(t.next()), tb.at_or_parked(t.next()));
        if pa != na && pa == nb && na == pb {
            out.push(Conflict::Edge { a, b, from: pa, to: na, at: t });
        }
    }
}
