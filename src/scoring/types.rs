use serde::Serialize;

use crate::constants::MAX_SCORE;

/// One contribution to a candidate's score, kept for the log trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    /// Raw cosine similarity (always the first entry).
    Cosine { value: f64 },
    /// Exact match on a normalized field.
    FieldMatch { field: &'static str, boost: f64 },
    /// Name similarity reached a tier.
    Name { similarity: f64, boost: f64 },
}

impl Signal {
    /// Boost contributed by this signal (`0.0` for the cosine entry).
    pub fn boost(&self) -> f64 {
        match self {
            Signal::Cosine { .. } => 0.0,
            Signal::FieldMatch { boost, .. } | Signal::Name { boost, .. } => *boost,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Cosine { value } => write!(f, "cos={:.3}", value),
            Signal::FieldMatch { field, boost } => write!(f, "{field}=match(+{:.2})", boost),
            Signal::Name { similarity, boost } => {
                write!(f, "Name≈{:.2}(+{:.2})", similarity, boost)
            }
        }
    }
}

/// Accumulates boosts for one candidate.
#[derive(Debug, Clone)]
pub struct ScoreTrace {
    cosine: f64,
    boost: f64,
    signals: Vec<Signal>,
}

impl ScoreTrace {
    pub fn new(cosine: f64) -> Self {
        Self {
            cosine,
            boost: 0.0,
            signals: vec![Signal::Cosine { value: cosine }],
        }
    }

    pub fn cosine(&self) -> f64 {
        self.cosine
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Adds `boost` when `matched` holds.
    pub fn field_match(&mut self, matched: bool, field: &'static str, boost: f64) {
        if matched && boost != 0.0 {
            self.boost += boost;
            self.signals.push(Signal::FieldMatch { field, boost });
        }
    }

    /// Adds the boost of the highest tier `similarity` reaches, if any.
    ///
    /// `tiers` must be ordered by descending threshold.
    pub fn name_similarity(&mut self, similarity: f64, tiers: &[(f64, f64)]) {
        if let Some(&(_, boost)) = tiers.iter().find(|(threshold, _)| similarity >= *threshold) {
            self.boost += boost;
            self.signals.push(Signal::Name { similarity, boost });
        }
    }

    /// `min(1.0, cosine_weight * cosine + boost)`. A NaN stays NaN and so
    /// fails every threshold.
    pub fn final_score(&self, cosine_weight: f64) -> f64 {
        let raw = cosine_weight * self.cosine + self.boost;
        if raw > MAX_SCORE { MAX_SCORE } else { raw }
    }

    pub fn into_signals(self) -> Vec<Signal> {
        self.signals
    }
}

/// Candidate code with its final score and the signals behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub code: String,
    pub score: f64,
    pub reasons: Vec<Signal>,
}

impl ScoredCandidate {
    pub fn new(code: impl Into<String>, score: f64, reasons: Vec<Signal>) -> Self {
        Self {
            code: code.into(),
            score,
            reasons,
        }
    }

    /// Reasons joined for log output: `cos=0.812, VAT=match(+0.50)`.
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
