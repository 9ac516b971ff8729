//! Unit tests for mapf-constraint.

#[cfg(test)]
mod helpers {
    use mapf_core::{AgentId, Cell, Trajectory};

    pub fn traj(agent: u32, cells: &[(u32, u32)]) -> Trajectory {
        Trajectory::new(
            AgentId(agent),
            cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
        )
        .unwrap()
    }
}

// ── Vertex occupancy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use mapf_core::{AgentId, Cell, ParkedAgent, Timestep};

    use super::helpers::traj;
    use crate::ConstraintStore;

    #[test]
    fn empty_store_blocks_nothing() {
        let store = ConstraintStore::empty();
        assert!(store.is_empty());
        assert!(!store.occupied(Cell::new(0, 0), Timestep(0)));
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(0)));
        assert_eq!(store.latest_finish(), Timestep::ZERO);
    }

    #[test]
    fn trajectory_cells_occupied_at_their_timestep_only() {
        let tr = traj(0, &[(0, 0), (0, 1), (0, 2)]);
        let store = ConstraintStore::build(&[tr], &[]);
        assert!(store.occupied(Cell::new(0, 1), Timestep(1)));
        assert!(!store.occupied(Cell::new(0, 1), Timestep(0)));
        assert!(!store.occupied(Cell::new(0, 1), Timestep(2)));
        assert_eq!(store.occupant(Cell::new(0, 2), Timestep(2)), Some(AgentId(0)));
        assert_eq!(store.latest_finish(), Timestep(2));
        assert_eq!(store.trajectory_count(), 1);
    }

    #[test]
    fn without_parking_the_goal_frees_up_after_finish() {
        let tr = traj(0, &[(0, 0), (0, 1)]);
        let store = ConstraintStore::build(&[tr], &[]);
        assert!(!store.occupied(Cell::new(0, 1), Timestep(5)));
    }

    #[test]
    fn parked_agent_blocks_forever_from_since() {
        let tr = traj(0, &[(0, 0), (0, 1)]);
        let parked = ParkedAgent::from_trajectory(&tr);
        let store = ConstraintStore::build(&[tr], &[parked]);

        assert!(store.occupied(Cell::new(0, 1), Timestep(1)));
        assert!(store.occupied(Cell::new(0, 1), Timestep(2)));
        assert!(store.occupied(Cell::new(0, 1), Timestep(10_000)));
        assert_eq!(store.occupant(Cell::new(0, 1), Timestep(50)), Some(AgentId(0)));
        assert_eq!(store.occupant(Cell::new(0, 1), Timestep(0)), None);
        assert_eq!(store.parked_count(), 1);
    }

    #[test]
    fn occupancy_agrees_with_parked_blocks() {
        let parked = ParkedAgent { agent: AgentId(1), cell: Cell::new(1, 3), since: Timestep(4) };
        let store = ConstraintStore::build(&[], &[parked]);
        for t in 0..8 {
            let t = Timestep(t);
            for cell in [Cell::new(1, 3), Cell::new(1, 2)] {
                assert_eq!(store.occupied(cell, t), parked.blocks(cell, t), "{cell} at {t}");
            }
        }
    }

    #[test]
    fn summary_counts_what_was_indexed() {
        let a = traj(0, &[(0, 0), (0, 1), (0, 2)]);
        let b = traj(1, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let parked = [ParkedAgent::from_trajectory(&a), ParkedAgent::from_trajectory(&b)];
        let store = ConstraintStore::build(&[a, b], &parked);
        assert_eq!(store.trajectory_count(), 2);
        assert_eq!(store.parked_count(), 2);
        assert_eq!(store.latest_finish(), Timestep(4));
        assert!(!store.is_empty());
    }

    #[test]
    fn parked_agent_does_not_block_before_since() {
        let parked = ParkedAgent { agent: AgentId(4), cell: Cell::new(2, 2), since: Timestep(6) };
        let store = ConstraintStore::build(&[], &[parked]);
        assert!(!store.occupied(Cell::new(2, 2), Timestep(5)));
        assert!(store.occupied(Cell::new(2, 2), Timestep(6)));
    }

    #[test]
    fn earliest_parking_wins_on_shared_cell() {
        let p1 = ParkedAgent { agent: AgentId(1), cell: Cell::new(0, 0), since: Timestep(9) };
        let p2 = ParkedAgent { agent: AgentId(2), cell: Cell::new(0, 0), since: Timestep(3) };
        let store = ConstraintStore::build(&[], &[p1, p2]);
        assert_eq!(store.occupant(Cell::new(0, 0), Timestep(4)), Some(AgentId(2)));
    }
}

// ── Edge (swap) occupancy ─────────────────────────────────────────────────────

#[cfg(test)]
mod swaps {
    use mapf_core::{Cell, ParkedAgent, Timestep};

    use super::helpers::traj;
    use crate::ConstraintStore;

    #[test]
    fn opposite_move_is_a_swap() {
        // Prior agent goes (0,1) → (0,0) between t=0 and t=1.
        let store = ConstraintStore::build(&[traj(0, &[(0, 1), (0, 0)])], &[]);
        assert!(store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(0)));
    }

    #[test]
    fn same_direction_is_not_a_swap() {
        // Following one step behind is allowed.
        let store = ConstraintStore::build(&[traj(0, &[(0, 1), (0, 2)])], &[]);
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(0)));
    }

    #[test]
    fn swap_needs_the_same_agent_on_both_ends() {
        // Agent 0 leaves (0,1) for (1,1); agent 1 enters (0,0) from (1,0).
        let store = ConstraintStore::build(
            &[traj(0, &[(0, 1), (1, 1)]), traj(1, &[(1, 0), (0, 0)])],
            &[],
        );
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(0)));
    }

    #[test]
    fn swap_only_in_that_interval() {
        let store = ConstraintStore::build(&[traj(0, &[(0, 1), (0, 0)])], &[]);
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(1)));
    }

    #[test]
    fn waits_never_swap() {
        let store = ConstraintStore::build(&[traj(0, &[(0, 0), (0, 0)])], &[]);
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 0), Timestep(0)));
    }

    #[test]
    fn parked_agents_never_swap() {
        let parked = ParkedAgent { agent: mapf_core::AgentId(0), cell: Cell::new(0, 1), since: Timestep(0) };
        let store = ConstraintStore::build(&[], &[parked]);
        assert!(!store.conflicts_edge(Cell::new(0, 0), Cell::new(0, 1), Timestep(3)));
        assert!(store.occupied(Cell::new(0, 1), Timestep(4)));
    }
}

// ── Plan verification ─────────────────────────────────────────────────────────

#[cfg(test)]
mod verify {
    use mapf_core::{AgentId, Cell, Timestep};

    use super::helpers::traj;
    use crate::{Conflict, find_conflicts};

    #[test]
    fn disjoint_plans_are_clean() {
        let plans = [traj(0, &[(0, 0), (0, 1)]), traj(1, &[(2, 0), (2, 1)])];
        assert!(find_conflicts(&plans).is_empty());
    }

    #[test]
    fn vertex_conflict_reported() {
        let plans = [traj(0, &[(0, 0), (0, 1)]), traj(1, &[(0, 2), (0, 1)])];
        assert_eq!(
            find_conflicts(&plans),
            vec![Conflict::Vertex {
                a: AgentId(0),
                b: AgentId(1),
                cell: Cell::new(0, 1),
                at: Timestep(1),
            }]
        );
    }

    #[test]
    fn edge_conflict_reported() {
        let plans = [traj(0, &[(0, 0), (0, 1)]), traj(1, &[(0, 1), (0, 0)])];
        let conflicts = find_conflicts(&plans);
        assert_eq!(conflicts.len(), 1);
        assert!(matches!(conflicts[0], Conflict::Edge { at: Timestep(0), .. }));
    }

    #[test]
    fn running_into_a_parked_agent_is_a_conflict() {
        // Agent 0 finishes at (0,1) at t=1; agent 1 arrives there at t=3.
        let plans = [
            traj(0, &[(0, 0), (0, 1)]),
            traj(1, &[(2, 1), (1, 1), (1, 1), (0, 1)]),
        ];
        let conflicts = find_conflicts(&plans);
        assert!(conflicts.contains(&Conflict::Vertex {
            a: AgentId(0),
            b: AgentId(1),
            cell: Cell::new(0, 1),
            at: Timestep(3),
        }));
    }

    #[test]
    fn display_mentions_both_agents() {
        let c = Conflict::Vertex { a: AgentId(0), b: AgentId(1), cell: Cell::new(1, 2), at: Timestep(3) };
        assert_eq!(c.to_string(), "AgentId(0) and AgentId(1) both at (1, 2) at t3");
    }
}
