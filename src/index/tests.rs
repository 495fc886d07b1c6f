use super::*;
use crate::adapter::{ItemAdapter, PartnerAdapter};
use crate::entity::{ItemCandidate, PartnerCandidate};
use crate::events::RecordingSink;
use crate::oracle::MockEmbedder;

fn partner(code: Option<&str>, name: Option<&str>) -> PartnerCandidate {
    PartnerCandidate {
        card_code: code.map(Into::into),
        card_name: name.map(Into::into),
        ..Default::default()
    }
}

#[test]
fn test_insert_last_write_wins() {
    let mut index = EmbeddingIndex::new();
    assert!(index.insert("V1", vec![1.0]).is_none());
    assert_eq!(index.insert("V1", vec![2.0]), Some(vec![1.0]));
    assert_eq!(index.len(), 1);
    assert_eq!(index.usable("V1"), Some(&[2.0f32][..]));
}

#[test]
fn test_usable_skips_empty_vectors() {
    let index: EmbeddingIndex = [("V1".to_string(), vec![]), ("V2".to_string(), vec![0.5])]
        .into_iter()
        .collect();

    assert!(index.contains("V1"));
    assert_eq!(index.usable("V1"), None);
    assert!(index.usable("V2").is_some());
    assert_eq!(index.usable("V3"), None);
}

#[test]
fn test_usable_skips_non_finite_vectors() {
    let mut index = EmbeddingIndex::new();
    index.insert("V1", vec![f32::NAN, 1.0]);
    index.insert("V2", vec![0.5, f32::INFINITY]);
    index.insert("V3", vec![0.5, -0.5]);

    assert!(index.contains("V1"));
    assert_eq!(index.usable("V1"), None);
    assert_eq!(index.usable("V2"), None);
    assert_eq!(index.usable("V3"), Some(&[0.5f32, -0.5][..]));
}

#[tokio::test]
async fn test_build_skips_non_finite_embeddings() {
    let candidate = partner(Some("V1"), Some("Nord"));
    let embedder = MockEmbedder::constant(vec![f32::NAN, 0.0]);
    let sink = RecordingSink::new();

    let index = EmbeddingIndex::build(&PartnerAdapter::default(), &[candidate], &embedder, &sink).await;

    assert!(index.is_empty());
    assert_eq!(sink.count(Severity::Warning), 1);
    assert!(sink.messages(Severity::Warning)[0].contains("not finite"));
}

#[tokio::test]
async fn test_build_skips_blank_codes_and_descriptions() {
    let candidates = vec![
        partner(Some("V1"), Some("Nord")),
        partner(None, Some("No code")),
        partner(Some("   "), Some("Blank code")),
        partner(Some("V2"), Some("Sued")),
    ];
    let embedder = MockEmbedder::constant(vec![0.1, 0.2]);
    let sink = RecordingSink::new();

    let index = EmbeddingIndex::build(&PartnerAdapter::default(), &candidates, &embedder, &sink).await;

    assert_eq!(index.len(), 2);
    assert!(index.contains("V1") && index.contains("V2"));
    assert_eq!(embedder.calls(), 2);
    assert_eq!(sink.messages(Severity::Success), vec!["BP index: 2 vectors created"]);
}

#[tokio::test]
async fn test_build_survives_embedding_failures() {
    let candidates = vec![ItemCandidate {
        item_code: Some("A-1".into()),
        item_name: Some("Papier".into()),
        ..Default::default()
    }];
    let embedder = MockEmbedder::failing("timeout");
    let sink = RecordingSink::new();

    let index = EmbeddingIndex::build(&ItemAdapter::default(), &candidates, &embedder, &sink).await;

    assert!(index.is_empty());
    assert_eq!(sink.count(Severity::Warning), 1);
    assert!(sink.messages(Severity::Warning)[0].contains("A-1"));
    assert_eq!(sink.messages(Severity::Success), vec!["ITM index: 0 vectors created"]);
}

#[tokio::test]
async fn test_build_uses_candidate_description() {
    let candidate = partner(Some("V1"), Some("Nord"));
    let description = candidate.semantic_text();
    let embedder = MockEmbedder::default().with_vector(description, vec![9.0]);

    let index = EmbeddingIndex::build(
        &PartnerAdapter::default(),
        &[candidate],
        &embedder,
        &crate::events::NoopSink,
    )
    .await;

    assert_eq!(index.usable("V1"), Some(&[9.0f32][..]));
}
