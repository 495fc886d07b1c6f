//! Every input combination resolves to a non-empty code.

mod common;

use std::sync::Arc;

use resolver::entity::{LineItemQuery, PartnerQuery};
use resolver::events::{NoopSink, RecordingSink, Severity};
use resolver::oracle::{Completer, Embedder, MockCompleter, MockEmbedder};
use resolver::resolver::{ItemResolver, MatchDecision, PartnerResolver, Resolver};
use resolver::{ItemAdapter, PartnerAdapter};

use common::fixtures::{
    CatalogBuilder, ITEM_FALLBACK, PARTNER_FALLBACK, at_cosine, item, item_resolver, line,
    partner, partner_resolver, query_vector,
};

/// Embedders paired with whether their query vector is usable.
fn embedders() -> Vec<(Arc<dyn Embedder>, bool)> {
    vec![
        (Arc::new(MockEmbedder::constant(query_vector())), true),
        (Arc::new(MockEmbedder::constant(Vec::new())), false),
        (Arc::new(MockEmbedder::failing("down")), false),
        (Arc::new(MockEmbedder::constant(vec![f32::NAN, 0.0])), false),
        (Arc::new(MockEmbedder::constant(vec![f32::INFINITY, 1.0])), false),
        (Arc::new(MockEmbedder::constant(vec![1.0, 0.0, f32::NEG_INFINITY])), false),
    ]
}

/// Outcome allowed for the given embedder; a candidate with a non-finite
/// vector is never the accepted code.
fn assert_sound(decision: &MatchDecision, usable_query: bool, poisoned: &str) {
    if !usable_query {
        assert!(
            !matches!(decision, MatchDecision::Accepted { .. }),
            "unusable query embedding accepted: {decision:?}"
        );
    }
    if let MatchDecision::Accepted { code, .. } = decision {
        assert_ne!(code, poisoned);
    }
}

fn completers() -> Vec<Arc<dyn Completer>> {
    vec![
        Arc::new(MockCompleter::answering("PICK")),
        Arc::new(MockCompleter::answering("")),
        Arc::new(MockCompleter::failing("down")),
    ]
}

#[tokio::test]
async fn test_partner_resolution_is_total() {
    let (full, full_index) = CatalogBuilder::new()
        .with("V1", partner("V1", "Beta"), at_cosine(0.5))
        .with("V2", partner("V2", "Gamma"), at_cosine(0.45))
        .without_vector(partner("V3", "Delta"))
        .with("V9", partner("V9", "Zeta Unrelated"), vec![f32::NAN, 1.0])
        .build();
    let queries = [None, Some(PartnerQuery::default()), Some(common::fixtures::seller())];
    let catalogs = [
        (Vec::new(), full_index.clone()),
        (full.clone(), resolver::index::EmbeddingIndex::new()),
        (full, full_index),
    ];

    for (embedder, usable_query) in embedders() {
        for completer in completers() {
            let sink = Arc::new(RecordingSink::new());
            let resolver = partner_resolver(embedder.clone(), completer, sink.clone());

            for query in &queries {
                for (candidates, index) in &catalogs {
                    let resolution = resolver.resolve(query.as_ref(), candidates, index).await;
                    assert!(!resolution.code().is_empty());
                    assert_sound(&resolution.decision, usable_query, "V9");
                    if resolution.decision.is_fallback() {
                        assert_eq!(resolution.code(), PARTNER_FALLBACK);
                    }

                    let prematched = resolver
                        .resolve_with_prematch(query.as_ref(), candidates, index)
                        .await;
                    assert!(!prematched.code().is_empty());
                }
            }
        }
    }
}

#[tokio::test]
async fn test_item_resolution_is_total() {
    let (full, full_index) = CatalogBuilder::new()
        .with("I1", item("I1", "Toner schwarz"), at_cosine(0.5))
        .with("I2", item("I2", "Toner cyan"), at_cosine(0.49))
        .with("I9", item("I9", "Toner schwarz"), vec![0.5, f32::NAN])
        .build();
    let queries = [
        None,
        Some(LineItemQuery::default()),
        Some(line("Toner schwarz")),
    ];
    let catalogs = [
        (Vec::new(), full_index.clone()),
        (full.clone(), resolver::index::EmbeddingIndex::new()),
        (full, full_index),
    ];

    for (embedder, usable_query) in embedders() {
        for completer in completers() {
            let sink = Arc::new(RecordingSink::new());
            let resolver = item_resolver(embedder.clone(), completer, sink.clone());

            let mut fallbacks = 0;
            for query in &queries {
                for (candidates, index) in &catalogs {
                    let resolution = resolver.resolve(query.as_ref(), candidates, index).await;
                    assert!(!resolution.code().is_empty());
                    assert_sound(&resolution.decision, usable_query, "I9");
                    if resolution.decision.is_fallback() {
                        assert_eq!(resolution.code(), ITEM_FALLBACK);
                        fallbacks += 1;
                    }
                }
            }

            // One warning per fallback, none otherwise.
            assert_eq!(sink.count(Severity::Warning), fallbacks);
        }
    }
}

#[tokio::test]
async fn test_sink_does_not_change_the_outcome() {
    let (candidates, index) = CatalogBuilder::new()
        .with("V1", partner("V1", "Beta"), at_cosine(0.9))
        .with("V2", partner("V2", "Gamma"), at_cosine(0.85))
        .build();
    let build = || -> PartnerResolver {
        Resolver::new(
            PartnerAdapter::default(),
            Arc::new(MockEmbedder::constant(query_vector())),
            Arc::new(MockCompleter::answering("V2")),
        )
    };

    let silent = build();
    let recorded = build().with_sink(Arc::new(RecordingSink::new()));

    let query = common::fixtures::seller();
    let a = silent.resolve(Some(&query), &candidates, &index).await;
    let b = recorded.resolve(Some(&query), &candidates, &index).await;

    assert_eq!(a.decision, b.decision);
}

#[tokio::test]
async fn test_blank_fallback_code_is_never_returned() {
    let resolver: ItemResolver = Resolver::new(
        ItemAdapter::default(),
        Arc::new(MockEmbedder::failing("down")),
        Arc::new(MockCompleter::default()),
    )
    .with_fallback_code("")
    .with_sink(Arc::new(NoopSink));

    let resolution = resolver.resolve(None, &[], &Default::default()).await;
    assert_eq!(resolution.code(), "E10000");
}
