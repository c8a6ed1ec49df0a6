use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which solving algorithm to run (§4.7 greedy, §4.8 backtracking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStrategy {
    /// Tiered relaxation, load-balanced. The later of the two solver
    /// variants and the default.
    Greedy,
    /// Exhaustive search over a conflict graph with a wall-clock deadline.
    Backtracking,
}

impl Default for SolveStrategy {
    fn default() -> Self {
        SolveStrategy::Greedy
    }
}

/// How strictly §4.4's per-day quota is enforced (REDESIGN FLAG R2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsecutivenessMode {
    /// v2: only the per-day session count for a (group, course) pair is
    /// capped; sessions on the same day need not be back-to-back.
    PerDayQuotaOnly,
    /// v1: sessions of the same (group, course) pair scheduled on the same
    /// day must additionally occupy immediately adjacent slots.
    StrictAdjacent,
}

impl Default for ConsecutivenessMode {
    fn default() -> Self {
        ConsecutivenessMode::PerDayQuotaOnly
    }
}

/// Tunables for a single `solve` call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    pub strategy: SolveStrategy,
    pub consecutiveness: ConsecutivenessMode,
    /// Whether the greedy solver may fall through tiers 3 and 4 (dropping
    /// competency and diversity checks) when tiers 1 and 2 find no slot.
    pub allow_emergency_tiers: bool,
    /// Wall-clock budget shared by both solvers (§5): greedy checks it
    /// every `DEADLINE_CHECK_INTERVAL` sessions, backtracking at the top
    /// of every recursive frame. Zero or negative disables the check.
    pub deadline_secs: f64,
}

impl SolverConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_secs_f64(self.deadline_secs.max(0.0))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: SolveStrategy::default(),
            consecutiveness: ConsecutivenessMode::default(),
            allow_emergency_tiers: true,
            deadline_secs: 5.0,
        }
    }
}
