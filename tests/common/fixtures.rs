//! Test fixtures for integration tests.

use std::sync::Arc;

use resolver::adapter::{ItemAdapter, PartnerAdapter};
use resolver::entity::{ItemCandidate, LineItemQuery, PartnerCandidate, PartnerQuery};
use resolver::events::RecordingSink;
use resolver::index::EmbeddingIndex;
use resolver::oracle::{Completer, Embedder, EmbeddingVector};
use resolver::resolver::{ItemResolver, PartnerResolver, Resolver};

pub const PARTNER_FALLBACK: &str = "V-FALLBACK";
pub const ITEM_FALLBACK: &str = "E-FALLBACK";

/// Unit vector whose cosine with `[1, 0]` is `cosine`.
pub fn at_cosine(cosine: f32) -> EmbeddingVector {
    vec![cosine, (1.0 - cosine * cosine).max(0.0).sqrt()]
}

pub fn query_vector() -> EmbeddingVector {
    vec![1.0, 0.0]
}

pub fn seller() -> PartnerQuery {
    PartnerQuery {
        name: Some("Alpha Handel GmbH".into()),
        street: Some("Hafenstrasse 1".into()),
        ..Default::default()
    }
}

pub fn partner(code: &str, name: &str) -> PartnerCandidate {
    PartnerCandidate {
        card_code: Some(code.into()),
        card_name: Some(name.into()),
        ..Default::default()
    }
}

pub fn line(name: &str) -> LineItemQuery {
    LineItemQuery {
        name: Some(name.into()),
        ..Default::default()
    }
}

pub fn item(code: &str, name: &str) -> ItemCandidate {
    ItemCandidate {
        item_code: Some(code.into()),
        item_name: Some(name.into()),
        ..Default::default()
    }
}

/// Candidates with their precomputed embeddings.
pub struct CatalogBuilder<C> {
    candidates: Vec<C>,
    index: EmbeddingIndex,
}

impl<C> Default for CatalogBuilder<C> {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            index: EmbeddingIndex::new(),
        }
    }
}

impl<C> CatalogBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: &str, candidate: C, vector: EmbeddingVector) -> Self {
        self.candidates.push(candidate);
        self.index.insert(code, vector);
        self
    }

    /// Candidate that is not in the index.
    pub fn without_vector(mut self, candidate: C) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn build(self) -> (Vec<C>, EmbeddingIndex) {
        (self.candidates, self.index)
    }
}

pub fn partner_resolver(
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    sink: Arc<RecordingSink>,
) -> PartnerResolver {
    Resolver::new(PartnerAdapter::default(), embedder, completer)
        .with_fallback_code(PARTNER_FALLBACK)
        .with_sink(sink)
}

pub fn item_resolver(
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    sink: Arc<RecordingSink>,
) -> ItemResolver {
    Resolver::new(ItemAdapter::default(), embedder, completer)
        .with_fallback_code(ITEM_FALLBACK)
        .with_sink(sink)
}
