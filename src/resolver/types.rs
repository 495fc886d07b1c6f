use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::EntityKind;

/// Input that makes resolution pointless before any oracle is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInput {
    MissingQuery,
    NoCandidates,
    EmptyEmbeddingIndex,
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::MissingQuery => write!(f, "no query"),
            InvalidInput::NoCandidates => write!(f, "no candidates"),
            InvalidInput::EmptyEmbeddingIndex => write!(f, "embedding index is empty"),
        }
    }
}

/// External call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleStage {
    Embedding,
    Arbitration,
}

impl std::fmt::Display for OracleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleStage::Embedding => write!(f, "embedding"),
            OracleStage::Arbitration => write!(f, "arbitration"),
        }
    }
}

/// Why the fallback code was returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    InvalidInput { input: InvalidInput },
    /// No candidate has a code and a non-empty embedding.
    NoScorableCandidates,
    /// The embedder returned an empty vector for the query.
    EmptyQueryEmbedding,
    /// The query embedding contains NaN or infinite components.
    NonFiniteQueryEmbedding,
    OracleFailure {
        stage: OracleStage,
        kind: String,
        message: String,
    },
    /// The model returned a blank answer.
    ArbitrationInconclusive,
    /// Resolution panicked; the payload message is kept.
    Internal { message: String },
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::InvalidInput { input } => write!(f, "invalid input: {input}"),
            FallbackReason::NoScorableCandidates => {
                write!(f, "no candidate with a usable embedding")
            }
            FallbackReason::EmptyQueryEmbedding => write!(f, "query embedding is empty"),
            FallbackReason::NonFiniteQueryEmbedding => {
                write!(f, "query embedding has non-finite components")
            }
            FallbackReason::OracleFailure {
                stage,
                kind,
                message,
            } => write!(f, "{stage} failed ({kind}): {message}"),
            FallbackReason::ArbitrationInconclusive => write!(f, "arbitration was inconclusive"),
            FallbackReason::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl From<InvalidInput> for FallbackReason {
    fn from(input: InvalidInput) -> Self {
        FallbackReason::InvalidInput { input }
    }
}

/// How a code was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum MatchDecision {
    /// Unique supplier-identifier hit, no scoring involved.
    DirectMatch { code: String },
    /// Passed the decision gate.
    Accepted { code: String, score: f64, delta: f64 },
    /// Picked by the arbitration model. Not verified against the candidates.
    Arbitrated { code: String },
    Fallback {
        code: String,
        #[serde(flatten)]
        reason: FallbackReason,
    },
}

impl MatchDecision {
    pub fn code(&self) -> &str {
        match self {
            MatchDecision::DirectMatch { code }
            | MatchDecision::Accepted { code, .. }
            | MatchDecision::Arbitrated { code }
            | MatchDecision::Fallback { code, .. } => code,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, MatchDecision::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            MatchDecision::Fallback { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Result of one resolution call. Always carries a non-empty code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub resolution_id: Uuid,
    pub kind: EntityKind,
    #[serde(flatten)]
    pub decision: MatchDecision,
}

impl Resolution {
    pub fn new(kind: EntityKind, decision: MatchDecision) -> Self {
        Self {
            resolution_id: Uuid::new_v4(),
            kind,
            decision,
        }
    }

    pub fn code(&self) -> &str {
        self.decision.code()
    }
}
