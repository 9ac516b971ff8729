//! warehouse: eight robots leaving the loading dock for their pick faces.
//!
//! Plans every robot with the prioritized planner, writes the trajectories
//! and per-robot summaries as CSV, then audits the plan for collisions.
//!
//! ```text
//! cargo run -p warehouse                  # default configuration
//! cargo run -p warehouse -- planner.json  # PlannerConfig loaded from JSON
//! RUST_LOG=debug cargo run -p warehouse   # one log line per search
//! ```

mod layout;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mapf_constraint::find_conflicts;
use mapf_core::{AgentId, PlannerConfig, PlanningContext, Timestep, Trajectory};
use mapf_output::{CsvWriter, OutputWriter, PlanOutputObserver};
use mapf_planner::{BlockReason, PlanObserver, PlanReport, PlannerBuilder};

use layout::{build_floor, robots};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/warehouse";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:           PlanOutputObserver<W>,
    trajectory_rows: usize,
    summary_rows:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: PlanOutputObserver<W>) -> Self {
        Self { inner, trajectory_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> PlanObserver for CountingObserver<W> {
    fn on_agent_start(&mut self, agent: AgentId, ctx: &PlanningContext) {
        self.inner.on_agent_start(agent, ctx);
    }

    fn on_agent_planned(&mut self, agent: AgentId, trajectory: &Trajectory, horizon: Timestep) {
        self.trajectory_rows += trajectory.len();
        self.inner.on_agent_planned(agent, trajectory, horizon);
    }

    fn on_agent_blocked(&mut self, agent: AgentId, reason: &BlockReason) {
        self.inner.on_agent_blocked(agent, reason);
    }

    fn on_plan_end(&mut self, report: &PlanReport) {
        self.summary_rows += report.agent_count();
        self.inner.on_plan_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== warehouse: prioritized multi-agent planning ===");

    // 1. Configuration: defaults, or a JSON file named on the command line.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let config = serde_json::from_str::<PlannerConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?;
            tracing::info!(%path, "planner config loaded");
            config
        }
        None => PlannerConfig::default(),
    };
    println!(
        "Bias: {} first, {} after  |  On failure: {}  |  Expansion cap: {:?}",
        config.initial_bias,
        config.subsequent_bias,
        config.failure_policy.as_str(),
        config.max_expansions,
    );

    // 2. Floor plan and robots.
    let floor = build_floor()?;
    let (starts, goals) = robots();
    println!(
        "Floor: {}x{} cells, {} passable  |  Robots: {}",
        floor.rows(),
        floor.cols(),
        floor.passable_count(),
        starts.len()
    );
    println!();

    // 3. Longest trip first: far robots get the clearest floor.
    let mut order: Vec<AgentId> = (0..starts.len() as u32).map(AgentId).collect();
    order.sort_by_key(|a| std::cmp::Reverse(starts[a.index()].manhattan(goals[a.index()])));

    // 4. Build planner.
    let mut planner = PlannerBuilder::with_astar(config, floor)
        .agents(starts, goals)
        .order(order)
        .build()?;

    // 5. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(PlanOutputObserver::new(writer));

    // 6. Plan.
    let t0 = Instant::now();
    let report = planner.plan(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Audit.
    let trajectories: Vec<Trajectory> = report.trajectories().cloned().collect();
    let conflicts = find_conflicts(&trajectories);
    for conflict in &conflicts {
        eprintln!("conflict: {conflict}");
    }

    // 8. Summary.
    println!("Planning complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  trajectories.csv : {} rows", obs.trajectory_rows);
    println!("  agents.csv       : {} rows", obs.summary_rows);
    println!(
        "  makespan {}  |  sum of costs {}  |  expansions {}  |  conflicts {}",
        report.makespan(),
        report.sum_of_costs(),
        report.expansions,
        conflicts.len()
    );
    println!();

    // 9. Per-robot table, in priority order.
    println!(
        "{:<7} {:<6} {:<9} {:<10} {:<10} {:<7} {:<6}",
        "Robot", "Rank", "Status", "From", "To", "Finish", "Waits"
    );
    println!("{}", "-".repeat(60));
    for (rank, &agent) in report.order.iter().enumerate() {
        let start = planner.starts()[agent.index()];
        let goal = planner.goals()[agent.index()];
        let Some(outcome) = report.outcome(agent) else { continue };
        let (finish, waits) = match outcome.trajectory() {
            Some(tr) => (tr.finish_time().to_string(), tr.wait_count().to_string()),
            None => ("-".into(), "-".into()),
        };
        println!(
            "{:<7} {:<6} {:<9} {:<10} {:<10} {:<7} {:<6}",
            agent.to_string(),
            rank,
            outcome.status(),
            start.to_string(),
            goal.to_string(),
            finish,
            waits,
        );
    }

    for (agent, reason) in report.blocked() {
        println!("{agent} blocked: {reason}");
    }

    Ok(())
}
