//! Ranking and the accept/defer gate.
//!
//! Scored candidates are sorted by descending score (stable, so equal scores
//! keep input order). The gate accepts the best candidate when it is strong on
//! its own, or clearly ahead of the runner-up. Everything else is deferred to
//! [`crate::arbitration`].



use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_ACCEPT_SCORE, DEFAULT_MARGIN_SCORE, DEFAULT_MIN_DELTA};
use crate::scoring::ScoredCandidate;

/// Thresholds of the decision gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Best score accepted regardless of the runner-up.
    pub accept_score: f64,
    /// Best score accepted when the margin reaches `min_delta`.
    pub margin_score: f64,
    pub min_delta: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            accept_score: DEFAULT_ACCEPT_SCORE,
            margin_score: DEFAULT_MARGIN_SCORE,
            min_delta: DEFAULT_MIN_DELTA,
        }
    }
}

/// Sorts by descending score. Ties keep their input order; NaN scores go last.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.total_cmp(&a.score),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    });
    scored
}

/// Result of applying the gate to a ranked list.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// The best candidate passed; `delta` is its margin over the runner-up.
    Accept { best: ScoredCandidate, delta: f64 },
    /// No candidate passed. The full ranking is handed back for arbitration.
    Indecisive { ranked: Vec<ScoredCandidate> },
}

impl GateOutcome {
    pub fn is_accept(&self) -> bool {
        matches!(self, GateOutcome::Accept { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecisionGate {
    config: GateConfig,
}

impl DecisionGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Whether a best score with the given margin is accepted.
    pub fn accepts(&self, best: f64, delta: f64) -> bool {
        best >= self.config.accept_score
            || (best >= self.config.margin_score && delta >= self.config.min_delta)
    }

    /// Applies the gate to a list already sorted by [`rank`].
    ///
    /// A missing runner-up counts as score 0.
    pub fn decide(&self, mut ranked: Vec<ScoredCandidate>) -> GateOutcome {
        if ranked.is_empty() {
            debug!("No scored candidates, gate is indecisive");
            return GateOutcome::Indecisive { ranked };
        }

        let best = &ranked[0];
        let second = ranked.get(1).map_or(0.0, |c| c.score);
        let delta = best.score - second;

        if self.accepts(best.score, delta) {
            debug!(code = %best.code, score = best.score, delta, "Gate accepted best candidate");
            let best = ranked.swap_remove(0);
            GateOutcome::Accept { best, delta }
        } else {
            debug!(
                code = %best.code,
                score = best.score,
                delta,
                "Gate indecisive"
            );
            GateOutcome::Indecisive { ranked }
        }
    }
}
