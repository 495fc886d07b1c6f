use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use crate::adapter::EntityAdapter;
use crate::arbitration::{Arbiter, ShortlistEntry, build_prompt};
use crate::decision::{DecisionGate, GateConfig, GateOutcome, rank};
use crate::events::{EventSink, NoopSink, Severity};
use crate::index::EmbeddingIndex;
use crate::normalize::non_blank;
use crate::oracle::{Completer, Embedder};
use crate::scoring::{CandidateScorer, ScoredCandidate, scorable_count};
use crate::similarity::is_usable_vector;

use super::error::ResolveError;
use super::types::{FallbackReason, InvalidInput, MatchDecision, Resolution};

/// Resolves queries of one entity kind to catalog codes.
///
/// Holds the oracles and the event sink; query, candidates and index are
/// passed per call and only read. [`Resolver::resolve`] always returns a
/// [`Resolution`] with a non-empty code.
pub struct Resolver<A: EntityAdapter> {
    adapter: A,
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    sink: Arc<dyn EventSink>,
    fallback_code: String,
    scorer: CandidateScorer,
    gate: DecisionGate,
    arbiter: Arbiter,
}

impl<A: EntityAdapter + std::fmt::Debug> std::fmt::Debug for Resolver<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("adapter", &self.adapter)
            .field("fallback_code", &self.fallback_code)
            .field("scorer", &self.scorer)
            .field("gate", &self.gate)
            .field("arbiter", &self.arbiter)
            .finish_non_exhaustive()
    }
}

impl<A: EntityAdapter> Resolver<A> {
    /// Resolver with the adapter's default fallback code, default thresholds
    /// and a [`NoopSink`].
    pub fn new(adapter: A, embedder: Arc<dyn Embedder>, completer: Arc<dyn Completer>) -> Self {
        let fallback_code = adapter.default_fallback().to_string();
        Self {
            adapter,
            embedder,
            completer,
            sink: Arc::new(NoopSink),
            fallback_code,
            scorer: CandidateScorer::default(),
            gate: DecisionGate::default(),
            arbiter: Arbiter::default(),
        }
    }

    /// Code returned when no tier resolves. A blank code keeps the adapter default.
    pub fn with_fallback_code(mut self, code: &str) -> Self {
        self.fallback_code = non_blank(Some(code))
            .unwrap_or(self.adapter.default_fallback())
            .to_string();
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_gate(mut self, config: GateConfig) -> Self {
        self.gate = DecisionGate::new(config);
        self
    }

    pub fn with_scorer(mut self, scorer: CandidateScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_arbiter(mut self, arbiter: Arbiter) -> Self {
        self.arbiter = arbiter;
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn fallback_code(&self) -> &str {
        &self.fallback_code
    }

    pub(crate) fn sink(&self) -> &dyn EventSink {
        self.sink.as_ref()
    }

    /// Resolves `query` against `candidates` using their precomputed `index`.
    ///
    /// Never fails. Precondition violations, oracle failures, a blank
    /// arbitration answer and panics all end in [`MatchDecision::Fallback`]
    /// with the reason attached.
    pub async fn resolve(
        &self,
        query: Option<&A::Query>,
        candidates: &[A::Candidate],
        index: &EmbeddingIndex,
    ) -> Resolution {
        let resolution_id = Uuid::new_v4();
        let kind = self.adapter.kind();
        let span = info_span!(
            "resolve",
            %kind,
            %resolution_id,
            candidates = candidates.len(),
            indexed = index.len()
        );

        let outcome = AssertUnwindSafe(self.run(query, candidates, index))
            .catch_unwind()
            .instrument(span)
            .await;

        let decision = match outcome {
            Ok(decision) => decision,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                debug!(%kind, %resolution_id, %message, "Resolution panicked");
                self.sink.emit(
                    Severity::Warning,
                    &format!("{} match error: Internal: {message}", kind.tag()),
                );
                self.fallback(FallbackReason::Internal { message })
            }
        };

        Resolution {
            resolution_id,
            kind,
            decision,
        }
    }

    async fn run(
        &self,
        query: Option<&A::Query>,
        candidates: &[A::Candidate],
        index: &EmbeddingIndex,
    ) -> MatchDecision {
        let tag = self.adapter.kind().tag();

        let query = match self.check_preconditions(query, candidates, index) {
            Ok(query) => query,
            Err(reason) => {
                debug!(%reason, "Resolution skipped");
                self.sink.emit(
                    Severity::Warning,
                    &format!("{tag} match skipped: {reason}, using fallback {}", self.fallback_code),
                );
                return self.fallback(reason);
            }
        };

        match self.hybrid(query, candidates, index).await {
            Ok(decision) => decision,
            Err(err) => {
                debug!(stage = %err.stage(), kind = err.kind(), error = %err, "Resolution failed");
                self.sink.emit(
                    Severity::Warning,
                    &format!(
                        "{tag} match error: {}: {}",
                        err.kind(),
                        err.oracle_error()
                    ),
                );
                self.fallback(err.into())
            }
        }
    }

    fn check_preconditions<'q>(
        &self,
        query: Option<&'q A::Query>,
        candidates: &[A::Candidate],
        index: &EmbeddingIndex,
    ) -> Result<&'q A::Query, FallbackReason> {
        let query = query.ok_or(InvalidInput::MissingQuery)?;

        if candidates.is_empty() {
            return Err(InvalidInput::NoCandidates.into());
        }
        if index.is_empty() {
            return Err(InvalidInput::EmptyEmbeddingIndex.into());
        }
        if self.adapter.requires_scorable_candidates()
            && scorable_count(&self.adapter, candidates, index) == 0
        {
            return Err(FallbackReason::NoScorableCandidates);
        }

        Ok(query)
    }

    async fn hybrid(
        &self,
        query: &A::Query,
        candidates: &[A::Candidate],
        index: &EmbeddingIndex,
    ) -> Result<MatchDecision, ResolveError> {
        let tag = self.adapter.kind().tag();

        let description = self.adapter.describe_query(query);
        self.sink
            .emit(Severity::Success, &format!("{tag} query: {description}"));

        let query_vector = self
            .embedder
            .embed(&description)
            .await
            .map_err(ResolveError::Embedding)?;

        if !is_usable_vector(&query_vector) {
            let reason = if query_vector.is_empty() {
                FallbackReason::EmptyQueryEmbedding
            } else {
                FallbackReason::NonFiniteQueryEmbedding
            };
            debug!(%reason, dim = query_vector.len(), "Query embedding unusable");
            self.sink.emit(
                Severity::Warning,
                &format!(
                    "{tag} match skipped: {reason}, using fallback {}",
                    self.fallback_code
                ),
            );
            return Ok(self.fallback(reason));
        }

        let scored =
            self.scorer
                .score_all(&self.adapter, query, candidates, index, &query_vector);

        let ranked = match self.gate.decide(rank(scored)) {
            GateOutcome::Accept { best, delta } => {
                info!(code = %best.code, score = best.score, delta, "Match accepted");
                self.sink.emit(
                    Severity::Success,
                    &format!(
                        "{tag} match accepted {}: score={:.2} Δ={:.2} [{}]",
                        best.code,
                        best.score,
                        delta,
                        best.reason_text()
                    ),
                );
                return Ok(MatchDecision::Accepted {
                    code: best.code,
                    score: best.score,
                    delta,
                });
            }
            GateOutcome::Indecisive { ranked } => ranked,
        };

        if ranked.is_empty() {
            return Ok(self.give_up(FallbackReason::NoScorableCandidates));
        }

        let shortlist = self.shortlist(&ranked, candidates);
        let prompt = build_prompt(
            self.adapter.kind(),
            &description,
            &shortlist,
            &self.fallback_code,
        );

        let pick = self
            .arbiter
            .arbitrate(self.completer.as_ref(), &prompt)
            .await
            .map_err(ResolveError::Arbitration)?;

        match pick {
            Some(code) => {
                info!(%code, shortlisted = shortlist.len(), "Match arbitrated");
                self.sink.emit(
                    Severity::Success,
                    &format!(
                        "{tag} match arbitrated: {code} (top: {})",
                        shortlist
                            .iter()
                            .map(|e| format!("#{} {}", e.rank, e.code))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                );
                Ok(MatchDecision::Arbitrated { code })
            }
            None => Ok(self.give_up(FallbackReason::ArbitrationInconclusive)),
        }
    }

    /// Top candidates with their descriptions, in rank order.
    fn shortlist(
        &self,
        ranked: &[ScoredCandidate],
        candidates: &[A::Candidate],
    ) -> Vec<ShortlistEntry> {
        ranked
            .iter()
            .take(self.arbiter.top_n())
            .enumerate()
            .map(|(i, scored)| {
                let summary = candidates
                    .iter()
                    .find(|c| non_blank(self.adapter.candidate_code(c)) == Some(scored.code.as_str()))
                    .map(|c| self.adapter.describe_candidate(c))
                    .unwrap_or_default();

                ShortlistEntry {
                    rank: i + 1,
                    code: scored.code.clone(),
                    summary,
                }
            })
            .collect()
    }

    /// Final fallback after scoring and arbitration produced nothing.
    fn give_up(&self, reason: FallbackReason) -> MatchDecision {
        debug!(%reason, "No tier resolved");
        self.sink.emit(
            Severity::Warning,
            &format!(
                "{} match failed ({reason}), using fallback {}",
                self.adapter.kind().tag(),
                self.fallback_code
            ),
        );
        self.fallback(reason)
    }

    pub(crate) fn fallback(&self, reason: FallbackReason) -> MatchDecision {
        MatchDecision::Fallback {
            code: self.fallback_code.clone(),
            reason,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string())
}
