use thiserror::Error;

use crate::oracle::OracleError;

use super::types::{FallbackReason, OracleStage};

/// Failure inside one resolution. Never leaves [`super::Resolver::resolve`];
/// it is reported once and converted into a [`FallbackReason`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("query embedding failed: {0}")]
    Embedding(#[source] OracleError),

    #[error("arbitration failed: {0}")]
    Arbitration(#[source] OracleError),
}

impl ResolveError {
    pub fn stage(&self) -> OracleStage {
        match self {
            ResolveError::Embedding(_) => OracleStage::Embedding,
            ResolveError::Arbitration(_) => OracleStage::Arbitration,
        }
    }

    pub fn oracle_error(&self) -> &OracleError {
        match self {
            ResolveError::Embedding(e) | ResolveError::Arbitration(e) => e,
        }
    }

    /// Short name of the underlying oracle failure.
    pub fn kind(&self) -> &'static str {
        self.oracle_error().kind()
    }
}

impl From<ResolveError> for FallbackReason {
    fn from(err: ResolveError) -> Self {
        FallbackReason::OracleFailure {
            stage: err.stage(),
            kind: err.kind().to_string(),
            message: err.oracle_error().to_string(),
        }
    }
}
