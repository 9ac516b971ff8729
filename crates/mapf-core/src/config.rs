//! Planner configuration and the mutable per-run planning context.

use crate::{CoreError, CoreResult, Timestep};

// ── FailurePolicy ─────────────────────────────────────────────────────────────

/// What the planner does when one agent's search fails.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// Record the blocked agent and keep planning the rest (best effort).
    #[default]
    Continue,
    /// Stop at the first blocked agent; remaining agents are reported skipped.
    Abort,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FailurePolicy::Continue => "continue",
            FailurePolicy::Abort    => "abort",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Top-level planner configuration.
///
/// Typically built in code or loaded from JSON by the application crate and
/// passed to `mapf_planner::PlannerBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Bias handed to the first agent's search.  `0.0` is neutral (plain A*).
    pub initial_bias: f32,

    /// Bias handed to every agent after the first.
    ///
    /// The default search reads this as a heuristic inflation weight:
    /// priority = g + (1 + bias) * h.  Larger values expand fewer states and
    /// may return paths that are slightly longer than optimal.
    pub subsequent_bias: f32,

    /// Continue past blocked agents or stop at the first one.
    pub failure_policy: FailurePolicy,

    /// Per-agent cap on popped states.  `None` disables the cap.
    pub max_expansions: Option<u64>,

    /// Per-agent cap on the timestep any search state may reach.  `None`
    /// leaves only the search's own bound (`horizon + cell_count`).
    pub max_timestep: Option<Timestep>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            initial_bias:    0.0,
            subsequent_bias: 0.25,
            failure_policy:  FailurePolicy::Continue,
            max_expansions:  Some(1_000_000),
            max_timestep:    None,
        }
    }
}

impl PlannerConfig {
    /// Plain A* for every agent: both biases neutral.
    pub fn unbiased() -> Self {
        Self { subsequent_bias: 0.0, ..Self::default() }
    }

    /// Reject values the search cannot interpret.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, bias) in [
            ("initial_bias", self.initial_bias),
            ("subsequent_bias", self.subsequent_bias),
        ] {
            if !bias.is_finite() || bias < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite, non-negative number (got {bias})"
                )));
            }
        }
        if self.max_expansions == Some(0) {
            return Err(CoreError::Config("max_expansions must be at least 1".into()));
        }
        Ok(())
    }

    /// Bias for the agent at position `rank` of the priority order.
    #[inline]
    pub fn bias_for_rank(&self, rank: usize) -> f32 {
        if rank == 0 { self.initial_bias } else { self.subsequent_bias }
    }
}

// ── PlanningContext ───────────────────────────────────────────────────────────

/// State threaded through successive agent searches by the planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanningContext {
    /// Latest finish time committed so far.  Later agents may not park
    /// before this timestep.
    pub horizon: Timestep,
    /// Bias forwarded to the next search call.
    pub bias: f32,
}

impl PlanningContext {
    pub fn new(initial_bias: f32) -> Self {
        Self { horizon: Timestep::ZERO, bias: initial_bias }
    }

    /// Raise the horizon to `finish` if it is later.  Never lowers it.
    #[inline]
    pub fn raise_horizon(&mut self, finish: Timestep) {
        if finish > self.horizon {
            self.horizon = finish;
        }
    }
}
