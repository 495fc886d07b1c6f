//! Candidate embeddings keyed by catalog code.
//!
//! The index is built once per catalog page by the caller (see
//! [`EmbeddingIndex::build`]) and is read-only during resolution.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::debug;

use crate::adapter::EntityAdapter;
use crate::events::{EventSink, Severity};
use crate::normalize::non_blank;
use crate::oracle::{Embedder, EmbeddingVector};
use crate::similarity::is_usable_vector;

/// Map from candidate code to its embedding. Duplicate codes: last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingIndex {
    vectors: HashMap<String, EmbeddingVector>,
}

impl EmbeddingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vector` under `code`, returning the vector it replaced.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        vector: EmbeddingVector,
    ) -> Option<EmbeddingVector> {
        self.vectors.insert(code.into(), vector)
    }

    /// Vector for `code`, if present, non-empty and free of NaN or infinite
    /// components.
    pub fn usable(&self, code: &str) -> Option<&[f32]> {
        self.vectors
            .get(code)
            .map(Vec::as_slice)
            .filter(|v| is_usable_vector(v))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.vectors.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embeds every candidate that has a code and a non-blank description.
    ///
    /// A failed embedding skips that candidate with a warning; the rest of the
    /// page is still indexed.
    pub async fn build<A: EntityAdapter>(
        adapter: &A,
        candidates: &[A::Candidate],
        embedder: &dyn Embedder,
        sink: &dyn EventSink,
    ) -> Self {
        let tag = adapter.kind().tag();
        let mut index = Self::new();

        for candidate in candidates {
            let Some(code) = non_blank(adapter.candidate_code(candidate)) else {
                continue;
            };
            let text = adapter.describe_candidate(candidate);
            if text.trim().is_empty() {
                continue;
            }

            match embedder.embed(&text).await {
                Ok(vector) if !is_usable_vector(&vector) => {
                    debug!(code, dim = vector.len(), "Skipping candidate: embedding unusable");
                    sink.emit(
                        Severity::Warning,
                        &format!("{tag} index: embedding for {code} is empty or not finite"),
                    );
                }
                Ok(vector) => {
                    if index.insert(code, vector).is_some() {
                        debug!(code, "Duplicate candidate code, keeping last embedding");
                    }
                }
                Err(e) => {
                    debug!(code, error = %e, "Skipping candidate: embedding failed");
                    sink.emit(
                        Severity::Warning,
                        &format!("{tag} index: embedding for {code} failed ({}): {e}", e.kind()),
                    );
                }
            }
        }

        sink.emit(
            Severity::Success,
            &format!("{tag} index: {} vectors created", index.len()),
        );
        index
    }
}

impl FromIterator<(String, EmbeddingVector)> for EmbeddingIndex {
    fn from_iter<I: IntoIterator<Item = (String, EmbeddingVector)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}
