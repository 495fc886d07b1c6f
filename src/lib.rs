//! Resolver library crate (used by the batch binary and integration tests).
//!
//! Resolves the seller and line items of a parsed e-invoice to catalog codes
//! of a business system. Each resolution runs up to three tiers:
//!
//! 1. supplier-identifier pre-match (sellers only, [`prematch`]),
//! 2. hybrid scoring: embedding cosine plus deterministic boosts, ranked and
//!    gated by score and margin ([`scoring`], [`decision`]),
//! 3. language-model arbitration over the top candidates ([`arbitration`]),
//!
//! and otherwise returns a configured fallback code. [`Resolver::resolve`]
//! never fails; the returned [`Resolution`] says which tier decided and, for a
//! fallback, why.
//!
//! ## Modules
//! - [`normalize`], [`similarity`] - pure helpers
//! - [`entity`], [`adapter`] - query/candidate records and per-kind rules
//! - [`index`] - candidate embeddings keyed by code
//! - [`oracle`] - embedding and completion clients
//! - [`events`] - resolution event stream
//! - [`resolver`] - the engine
//! - [`job`] - whole-invoice batch runs
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod adapter;
pub mod arbitration;
pub mod config;
pub mod constants;
pub mod decision;
pub mod entity;
pub mod events;
pub mod index;
pub mod job;
pub mod normalize;
pub mod oracle;
pub mod prematch;
pub mod resolver;
pub mod scoring;
pub mod similarity;

pub use adapter::{BoostTable, EntityAdapter, ItemAdapter, PartnerAdapter};
pub use arbitration::{Arbiter, ShortlistEntry, build_prompt};
pub use config::{Config, ConfigError};
pub use decision::{DecisionGate, GateConfig, GateOutcome, rank};
pub use entity::{
    EntityKind, ItemCandidate, ItemGroup, LineItemQuery, PartnerAddress, PartnerCandidate,
    PartnerQuery,
};
#[cfg(any(test, feature = "mock"))]
pub use events::{RecordedEvent, RecordingSink};
pub use events::{EventSink, NoopSink, Severity, TracingSink};
pub use index::EmbeddingIndex;
pub use job::{JobError, JobReport, JobRunner, ResolutionJob};
#[cfg(any(test, feature = "mock"))]
pub use oracle::{MockCompleter, MockEmbedder};
pub use oracle::{
    ChatCompleter, Completer, Embedder, EmbeddingVector, HttpEmbedder, OracleError, OracleResult,
};
pub use prematch::{DirectMatch, extract_supplier_ids, match_supplier_ids};
pub use resolver::{
    FallbackReason, InvalidInput, ItemResolver, MatchDecision, OracleStage, PartnerResolver,
    Resolution, ResolveError, Resolver,
};
pub use scoring::{CandidateScorer, ScoreTrace, ScoredCandidate, Signal, scorable_count};
pub use similarity::{cosine_similarity, is_usable_vector, token_set_similarity};
