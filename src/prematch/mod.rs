//! Deterministic supplier-identifier match, tried before hybrid scoring.
//!
//! The seller's identifiers are compared, case-insensitively and trimmed,
//! against each business partner's supplier catalog number, federal tax id
//! and VAT id. A single hit resolves the seller outright. Several hits or
//! none hand over to [`Resolver::resolve`].


use tracing::debug;

use crate::adapter::PartnerAdapter;
use crate::entity::{EntityKind, PartnerCandidate, PartnerQuery};
use crate::events::Severity;
use crate::index::EmbeddingIndex;
use crate::normalize::non_blank;
use crate::resolver::{MatchDecision, Resolution, Resolver};

/// Outcome of the identifier comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectMatch {
    /// Exactly one partner matched; carries its code.
    Unique(String),
    /// More than one partner matched.
    Ambiguous(usize),
    NoMatch,
}

/// Seller id, global id and legal-organization id, trimmed and lower-cased.
///
/// Blank values are skipped and duplicates dropped; first occurrence wins.
pub fn extract_supplier_ids(query: &PartnerQuery) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();

    for id in [
        query.id.as_deref(),
        query.global_id.as_deref(),
        query.legal_organization_id.as_deref(),
    ] {
        if let Some(id) = non_blank(id) {
            let id = id.to_lowercase();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    ids
}

fn folded(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_lowercase)
}

/// Compares `ids` against every partner's identifier fields.
///
/// Partners without a code never match.
pub fn match_supplier_ids(ids: &[String], candidates: &[PartnerCandidate]) -> DirectMatch {
    if ids.is_empty() {
        return DirectMatch::NoMatch;
    }

    let hits: Vec<&str> = candidates
        .iter()
        .filter(|c| {
            [
                c.supplier_catalog_nr.as_deref(),
                c.federal_tax_id.as_deref(),
                c.vat_id_num.as_deref(),
            ]
            .into_iter()
            .filter_map(folded)
            .any(|value| ids.contains(&value))
        })
        .filter_map(|c| non_blank(c.code()))
        .collect();

    match hits.as_slice() {
        [] => DirectMatch::NoMatch,
        [code] => DirectMatch::Unique(code.to_string()),
        many => DirectMatch::Ambiguous(many.len()),
    }
}

impl Resolver<PartnerAdapter> {
    /// Tries the supplier-identifier match first and falls through to
    /// [`Resolver::resolve`] unless exactly one partner matched.
    pub async fn resolve_with_prematch(
        &self,
        query: Option<&PartnerQuery>,
        candidates: &[PartnerCandidate],
        index: &EmbeddingIndex,
    ) -> Resolution {
        if let Some(seller) = query {
            let ids = extract_supplier_ids(seller);
            let outcome = match_supplier_ids(&ids, candidates);
            if let Some(resolution) = self.report_prematch(&ids, outcome) {
                return resolution;
            }
        }

        self.resolve(query, candidates, index).await
    }

    fn report_prematch(&self, ids: &[String], outcome: DirectMatch) -> Option<Resolution> {
        let tag = EntityKind::BusinessPartner.tag();
        let sink = self.sink();

        match outcome {
            DirectMatch::Unique(code) => {
                debug!(%code, "Supplier id matched a single partner");
                sink.emit(
                    Severity::Success,
                    &format!(
                        "{tag} supplier id match ({}) is unique, scoring skipped: {code}",
                        ids.join(", ")
                    ),
                );
                Some(Resolution::new(
                    EntityKind::BusinessPartner,
                    MatchDecision::DirectMatch { code },
                ))
            }
            DirectMatch::Ambiguous(count) => {
                debug!(count, "Supplier id matched several partners");
                sink.emit(
                    Severity::Warning,
                    &format!("{tag} supplier id matches {count} partners, scoring decides"),
                );
                None
            }
            DirectMatch::NoMatch => {
                sink.emit(
                    Severity::None,
                    &format!("{tag} no supplier id match, scoring decides"),
                );
                None
            }
        }
    }
}
