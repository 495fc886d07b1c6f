use std::io::Write;

use super::*;
use crate::events::{RecordingSink, Severity};
use crate::oracle::{MockCompleter, MockEmbedder};
use crate::resolver::MatchDecision;

const JOB_JSON: &str = r#"{
    "seller": { "id": "LIEF-01", "name": "Lieferant Nord GmbH" },
    "lines": [
        { "seller_assigned_id": "A-1", "name": "Kopierpapier" },
        { "name": "Toner" }
    ],
    "partners": [
        { "CardCode": "V1", "CardName": "Lieferant Nord", "SupplierCatalogNr": "lief-01" },
        { "CardCode": "V2", "CardName": "Andere AG" }
    ],
    "items": [
        { "ItemCode": "I1", "ItemName": "Kopierpapier A4", "SupplierCatalogNo": "A-1" },
        { "ItemCode": "I2", "ItemName": "Toner schwarz", "ItemGroups": { "GroupName": "Buero" } }
    ]
}"#;

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(JOB_JSON.as_bytes()).unwrap();

    let job = ResolutionJob::from_path(file.path()).unwrap();

    assert_eq!(job.seller.as_ref().and_then(|s| s.id.as_deref()), Some("LIEF-01"));
    assert_eq!(job.lines.len(), 2);
    assert_eq!(job.partners[0].supplier_catalog_nr.as_deref(), Some("lief-01"));
    assert_eq!(job.items[1].group_name(), Some("Buero"));
}

#[test]
fn test_missing_sections_default_to_empty() {
    let job: ResolutionJob = serde_json::from_str("{}").unwrap();
    assert_eq!(job, ResolutionJob::default());
}

#[test]
fn test_from_path_errors() {
    let missing = ResolutionJob::from_path("/nonexistent/job.json").unwrap_err();
    assert!(matches!(missing, JobError::Read { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    let invalid = ResolutionJob::from_path(file.path()).unwrap_err();
    assert!(matches!(invalid, JobError::Parse { .. }));
    assert!(invalid.to_string().contains("failed to parse job file"));
}

#[tokio::test]
async fn test_run_resolves_seller_and_lines() {
    let job: ResolutionJob = serde_json::from_str(JOB_JSON).unwrap();
    let embedder = Arc::new(MockEmbedder::constant(vec![1.0, 0.0]));
    let completer = Arc::new(MockCompleter::default());
    let sink = Arc::new(RecordingSink::new());

    let runner = JobRunner::new(&Config::default(), embedder, completer, sink.clone());
    let report = runner.run(&job).await;

    assert_eq!(
        report.seller.decision,
        MatchDecision::DirectMatch { code: "V1".into() }
    );
    assert_eq!(report.lines.len(), 2);
    // Identical embeddings everywhere: cosine 1.0 plus the catalog-number boost.
    assert!(matches!(
        report.lines[0].decision,
        MatchDecision::Accepted { ref code, .. } if code == "I1"
    ));
    assert!(report.lines.iter().all(|r| !r.code().is_empty()));

    let successes = sink.messages(Severity::Success);
    assert!(successes.contains(&"BP index: 2 vectors created".to_string()));
    assert!(successes.contains(&"ITM index: 2 vectors created".to_string()));
}

#[tokio::test]
async fn test_run_uses_configured_fallbacks() {
    let job = ResolutionJob {
        lines: vec![LineItemQuery::default()],
        ..Default::default()
    };
    let config = Config {
        partner_fallback: "V-NONE".into(),
        item_fallback: "E-NONE".into(),
        ..Default::default()
    };

    let runner = JobRunner::new(
        &config,
        Arc::new(MockEmbedder::constant(vec![1.0])),
        Arc::new(MockCompleter::default()),
        Arc::new(crate::events::NoopSink),
    );
    let report = runner.run(&job).await;

    assert_eq!(report.seller.code(), "V-NONE");
    assert_eq!(report.lines[0].code(), "E-NONE");
}
