use tracing::debug;

use crate::adapter::EntityAdapter;
use crate::constants::COSINE_WEIGHT;
use crate::index::EmbeddingIndex;
use crate::normalize::non_blank;
use crate::similarity::cosine_similarity;

use super::types::{ScoreTrace, ScoredCandidate};

/// Combines cosine similarity with an adapter's deterministic boosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScorer {
    cosine_weight: f64,
}

impl Default for CandidateScorer {
    fn default() -> Self {
        Self::new(COSINE_WEIGHT)
    }
}

impl CandidateScorer {
    pub fn new(cosine_weight: f64) -> Self {
        Self { cosine_weight }
    }

    pub fn cosine_weight(&self) -> f64 {
        self.cosine_weight
    }

    /// Scores one candidate whose embedding is `candidate_vector`.
    pub fn score_one<A: EntityAdapter>(
        &self,
        adapter: &A,
        features: &A::Features,
        code: &str,
        candidate: &A::Candidate,
        query_vector: &[f32],
        candidate_vector: &[f32],
    ) -> ScoredCandidate {
        let mut trace = ScoreTrace::new(cosine_similarity(query_vector, candidate_vector));
        adapter.apply_boosts(features, candidate, &mut trace);

        let score = trace.final_score(self.cosine_weight);
        ScoredCandidate::new(code, score, trace.into_signals())
    }

    /// Scores every candidate that has a code and a usable embedding, in input order.
    pub fn score_all<A: EntityAdapter>(
        &self,
        adapter: &A,
        query: &A::Query,
        candidates: &[A::Candidate],
        index: &EmbeddingIndex,
        query_vector: &[f32],
    ) -> Vec<ScoredCandidate> {
        let features = adapter.extract(query);

        let scored: Vec<ScoredCandidate> = candidates
            .iter()
            .filter_map(|candidate| {
                let code = non_blank(adapter.candidate_code(candidate))?;
                let vector = index.usable(code)?;
                Some(self.score_one(adapter, &features, code, candidate, query_vector, vector))
            })
            .collect();

        debug!(
            kind = %adapter.kind(),
            candidates = candidates.len(),
            scored = scored.len(),
            "Scored candidates"
        );
        scored
    }
}

/// Number of candidates [`CandidateScorer::score_all`] would score.
pub fn scorable_count<A: EntityAdapter>(
    adapter: &A,
    candidates: &[A::Candidate],
    index: &EmbeddingIndex,
) -> usize {
    candidates
        .iter()
        .filter(|c| {
            non_blank(adapter.candidate_code(c))
                .and_then(|code| index.usable(code))
                .is_some()
        })
        .count()
}
