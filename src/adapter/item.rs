use std::collections::HashSet;

use super::{BoostTable, EntityAdapter};
use crate::constants::DEFAULT_ITEM_FALLBACK;
use crate::entity::{EntityKind, ItemCandidate, LineItemQuery};
use crate::normalize::{
    normalize_barcode, normalize_identifier, normalize_item_name, same_barcode, same_identifier,
};
use crate::scoring::ScoreTrace;
use crate::similarity::token_set_similarity;

/// Line values compared against each catalog article.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFeatures {
    /// Normalized seller-assigned and global ids.
    pub supplier_ids: HashSet<String>,
    pub buyer_id: Option<String>,
    pub barcode: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ItemAdapter {
    boosts: BoostTable,
}

impl Default for ItemAdapter {
    fn default() -> Self {
        Self::new(BoostTable::item())
    }
}

impl ItemAdapter {
    pub fn new(boosts: BoostTable) -> Self {
        Self { boosts }
    }

    pub fn boosts(&self) -> &BoostTable {
        &self.boosts
    }
}

impl EntityAdapter for ItemAdapter {
    type Query = LineItemQuery;
    type Candidate = ItemCandidate;
    type Features = ItemFeatures;

    fn kind(&self) -> EntityKind {
        EntityKind::Item
    }

    fn default_fallback(&self) -> &'static str {
        DEFAULT_ITEM_FALLBACK
    }

    fn candidate_code<'a>(&self, candidate: &'a ItemCandidate) -> Option<&'a str> {
        candidate.code()
    }

    fn describe_query(&self, query: &LineItemQuery) -> String {
        let text = query.semantic_text();
        if text.trim().is_empty() {
            query.fallback_text()
        } else {
            text
        }
    }

    fn describe_candidate(&self, candidate: &ItemCandidate) -> String {
        candidate.semantic_text()
    }

    fn extract(&self, query: &LineItemQuery) -> ItemFeatures {
        let supplier_ids = [query.seller_assigned_id.as_deref(), query.global_id.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(normalize_identifier)
            .collect();

        ItemFeatures {
            supplier_ids,
            buyer_id: query.buyer_assigned_id.as_deref().and_then(normalize_identifier),
            barcode: query.barcode.as_deref().and_then(normalize_barcode),
            name: normalize_item_name(query.name.as_deref().unwrap_or_default()),
        }
    }

    fn apply_boosts(
        &self,
        features: &ItemFeatures,
        candidate: &ItemCandidate,
        trace: &mut ScoreTrace,
    ) {
        let b = &self.boosts;

        let catalog_hit = candidate
            .supplier_catalog_no
            .as_deref()
            .and_then(normalize_identifier)
            .is_some_and(|no| features.supplier_ids.contains(&no));
        trace.field_match(catalog_hit, "SupplierCatalogNo", b.strong_id);

        trace.field_match(
            same_barcode(features.barcode.as_deref(), candidate.barcode.as_deref()),
            "Barcode",
            b.secondary_id,
        );
        trace.field_match(
            same_identifier(features.buyer_id.as_deref(), candidate.code()),
            "BuyerId<>ItemCode",
            b.cross_id,
        );

        let similarity = candidate
            .name_variants()
            .into_iter()
            .map(|variant| {
                token_set_similarity(
                    &features.name,
                    &normalize_item_name(variant.unwrap_or_default()),
                )
            })
            .fold(0.0f64, f64::max);
        trace.name_similarity(similarity, &b.name_tiers);
    }

    fn requires_scorable_candidates(&self) -> bool {
        true
    }
}
