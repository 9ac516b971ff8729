//! Unit tests for mapf-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert!(!AgentId::INVALID.is_valid());
        assert!(AgentId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 3);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn offset_stops_at_zero() {
        let c = Cell::new(0, 4);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(0, -1), Some(Cell::new(0, 3)));
        assert_eq!(c.offset(1, 1), Some(Cell::new(1, 5)));
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(Cell::new(0, 1)));
        assert!(!c.is_adjacent(Cell::new(0, 0)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn row_major_ordering() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
    }
}

#[cfg(test)]
mod time {
    use crate::Timestep;

    #[test]
    fn arithmetic() {
        let t = Timestep(10);
        assert_eq!(t + 5, Timestep(15));
        assert_eq!(t.next(), Timestep(11));
        assert_eq!(Timestep(15) - Timestep(10), 5);
        assert_eq!(Timestep(3) - Timestep(7), 0);
    }

    #[test]
    fn arithmetic_saturates_at_the_end_of_time() {
        let last = Timestep(u32::MAX);
        assert_eq!(last.next(), last);
        assert_eq!(last + 1, last);
        assert_eq!(Timestep(u32::MAX - 2) + 10, last);
    }

    #[test]
    fn display() {
        assert_eq!(Timestep(4).to_string(), "t4");
    }
}

#[cfg(test)]
mod trajectory {
    use crate::{AgentId, Cell, ParkedAgent, Timestep, Trajectory};

    fn sample() -> Trajectory {
        // (0,0) → (0,1) → wait → (1,1)
        Trajectory::new(
            AgentId(3),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 1), Cell::new(1, 1)],
        )
        .unwrap()
    }

    #[test]
    fn empty_rejected() {
        assert!(Trajectory::new(AgentId(0), vec![]).is_none());
    }

    #[test]
    fn accessors() {
        let tr = sample();
        assert_eq!(tr.start(), Cell::new(0, 0));
        assert_eq!(tr.goal(), Cell::new(1, 1));
        assert_eq!(tr.len(), 4);
        assert_eq!(tr.finish_time(), Timestep(3));
        assert_eq!(tr.at(Timestep(2)), Some(Cell::new(0, 1)));
        assert_eq!(tr.at(Timestep(4)), None);
        assert_eq!(tr.at_or_parked(Timestep(40)), Cell::new(1, 1));
    }

    #[test]
    fn moves_and_waits() {
        let tr = sample();
        assert_eq!(tr.move_count(), 2);
        assert_eq!(tr.wait_count(), 1);
    }

    #[test]
    fn parked_starts_at_last_timestep() {
        let tr = sample();
        let parked = ParkedAgent::from_trajectory(&tr);
        assert_eq!(parked.agent, AgentId(3));
        assert_eq!(parked.cell, Cell::new(1, 1));
        assert_eq!(parked.since.index(), tr.len() - 1);
        assert!(!parked.blocks(Cell::new(1, 1), Timestep(2)));
        assert!(parked.blocks(Cell::new(1, 1), Timestep(3)));
        assert!(parked.blocks(Cell::new(1, 1), Timestep(1_000)));
        assert!(!parked.blocks(Cell::new(0, 1), Timestep(1_000)));
    }
}

#[cfg(test)]
mod config {
    use crate::{FailurePolicy, PlannerConfig, PlanningContext, Timestep};

    #[test]
    fn defaults_validate() {
        let cfg = PlannerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.failure_policy, FailurePolicy::Continue);
        assert_eq!(cfg.initial_bias, 0.0);
    }

    #[test]
    fn negative_bias_rejected() {
        let cfg = PlannerConfig { subsequent_bias: -0.5, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_bias_rejected() {
        let cfg = PlannerConfig { initial_bias: f32::NAN, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_expansion_cap_rejected() {
        let cfg = PlannerConfig { max_expansions: Some(0), ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bias_switches_after_first_rank() {
        let cfg = PlannerConfig { initial_bias: 0.0, subsequent_bias: 0.7, ..PlannerConfig::default() };
        assert_eq!(cfg.bias_for_rank(0), 0.0);
        assert_eq!(cfg.bias_for_rank(1), 0.7);
        assert_eq!(cfg.bias_for_rank(9), 0.7);
    }

    #[test]
    fn horizon_never_decreases() {
        let mut ctx = PlanningContext::new(0.0);
        ctx.raise_horizon(Timestep(5));
        ctx.raise_horizon(Timestep(3));
        assert_eq!(ctx.horizon, Timestep(5));
        ctx.raise_horizon(Timestep(8));
        assert_eq!(ctx.horizon, Timestep(8));
    }

    #[test]
    fn policy_display() {
        assert_eq!(FailurePolicy::Abort.to_string(), "abort");
        assert_eq!(FailurePolicy::Continue.to_string(), "continue");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_io {
    use crate::{AgentId, Cell, CoreError, ParkedAgent, Timestep, Trajectory};

    #[test]
    fn trajectory_survives_json() {
        let tr = Trajectory::new(AgentId(2), vec![Cell::new(0, 0), Cell::new(0, 1)]).unwrap();
        let json = serde_json::to_string(&tr).unwrap();
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tr);
        assert_eq!(ParkedAgent::from_trajectory(&back).since, Timestep(1));
    }

    #[test]
    fn empty_trajectory_rejected_on_load() {
        let err = serde_json::from_str::<Trajectory>(r#"{"agent":0,"cells":[]}"#).unwrap_err();
        let expected = CoreError::EmptyTrajectory { agent: AgentId(0) }.to_string();
        assert!(err.to_string().contains(&expected), "{err}");
    }

    #[test]
    fn cells_are_required() {
        assert!(serde_json::from_str::<Trajectory>(r#"{"agent":0}"#).is_err());
    }
}
