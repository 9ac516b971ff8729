//! Tests for mapf-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSummaryRow, TrajectoryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trajectories.csv").exists());
        assert!(dir.path().join("agents.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, "trajectories.csv");
        assert_eq!(headers, ["agent_id", "timestep", "row", "col"]);
        assert!(rows.is_empty());

        let (headers, _) = read(&dir, "agents.csv");
        assert_eq!(headers, ["agent_id", "priority", "status", "finish_time", "moves", "waits"]);
    }

    #[test]
    fn trajectory_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            TrajectoryRow { agent_id: 3, timestep: 0, row: 1, col: 1 },
            TrajectoryRow { agent_id: 3, timestep: 1, row: 1, col: 2 },
        ];
        w.write_trajectory(&rows).unwrap();
        w.finish().unwrap();

        let (_, read_rows) = read(&dir, "trajectories.csv");
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[1][0], "3"); // agent_id
        assert_eq!(&read_rows[1][1], "1"); // timestep
        assert_eq!(&read_rows[1][3], "2"); // col
    }

    #[test]
    fn blocked_agent_has_empty_finish_time() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_agent_summary(&AgentSummaryRow {
            agent_id:    1,
            priority:    0,
            status:      "blocked",
            finish_time: None,
            moves:       0,
            waits:       0,
        })
        .unwrap();
        w.finish().unwrap();

        let (_, read_rows) = read(&dir, "agents.csv");
        assert_eq!(&read_rows[0][2], "blocked");
        assert_eq!(&read_rows[0][3], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does-not-exist")).is_err());
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use mapf_core::{AgentId, Cell, Trajectory};
    use mapf_planner::{AgentOutcome, BlockReason};

    use crate::row::{AgentSummaryRow, TrajectoryRow};

    #[test]
    fn rows_for_trajectory() {
        let tr = Trajectory::new(AgentId(2), vec![Cell::new(0, 0), Cell::new(0, 0), Cell::new(1, 0)])
            .unwrap();
        let rows = TrajectoryRow::rows_for(&tr);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], TrajectoryRow { agent_id: 2, timestep: 2, row: 1, col: 0 });
    }

    #[test]
    fn summary_counts_moves_and_waits() {
        let tr = Trajectory::new(AgentId(0), vec![Cell::new(0, 0), Cell::new(0, 0), Cell::new(1, 0)])
            .unwrap();
        let row = AgentSummaryRow::new(AgentId(0), 1, &AgentOutcome::Planned(tr));
        assert_eq!(row.status, "planned");
        assert_eq!(row.finish_time, Some(2));
        assert_eq!((row.moves, row.waits), (1, 1));
        assert_eq!(row.priority, 1);
    }

    #[test]
    fn summary_for_blocked_and_skipped() {
        let blocked = AgentSummaryRow::new(AgentId(4), 0, &AgentOutcome::Blocked(BlockReason::Exhausted));
        assert_eq!(blocked.status, "blocked");
        assert_eq!(blocked.finish_time, None);
        let skipped = AgentSummaryRow::new(AgentId(5), 1, &AgentOutcome::Skipped);
        assert_eq!(skipped.status, "skipped");
    }
}

// ── Observer integration ──────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use mapf_core::{Cell, PlannerConfig};
    use mapf_grid::GridMap;
    use mapf_planner::PlannerBuilder;

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, PlanOutputObserver};
    use crate::row::{AgentSummaryRow, TrajectoryRow};

    #[test]
    fn integration_csv() {
        // Agent 1's goal is cut off by the wall.
        let grid = GridMap::from_ascii(
            "
            ..@.
            ..@.
            ",
        )
        .unwrap();
        let mut planner = PlannerBuilder::with_astar(PlannerConfig::default(), grid)
            .agents(
                vec![Cell::new(0, 0), Cell::new(1, 0)],
                vec![Cell::new(1, 1), Cell::new(0, 3)],
            )
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PlanOutputObserver::new(writer);
        let report = planner.plan(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let tr0 = report.trajectory(mapf_core::AgentId(0)).unwrap();
        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), tr0.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("agents.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "planned");
        assert_eq!(&rows[1][2], "blocked");
    }

    /// Writer whose trajectory writes always fail.
    struct Failing {
        finished: bool,
    }

    impl OutputWriter for Failing {
        fn write_trajectory(&mut self, _rows: &[TrajectoryRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn write_agent_summary(&mut self, _row: &AgentSummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept_and_planning_continues() {
        let mut planner = PlannerBuilder::with_astar(PlannerConfig::default(), GridMap::open(3, 3))
            .agents(vec![Cell::new(0, 0), Cell::new(2, 2)], vec![Cell::new(0, 2), Cell::new(2, 0)])
            .build()
            .unwrap();

        let mut obs = PlanOutputObserver::new(Failing { finished: false });
        let report = planner.plan(&mut obs).unwrap();
        assert!(report.all_succeeded());
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
