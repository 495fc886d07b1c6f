use super::{BoostTable, EntityAdapter};
use crate::constants::DEFAULT_PARTNER_FALLBACK;
use crate::entity::{EntityKind, PartnerCandidate, PartnerQuery};
use crate::normalize::{
    non_blank, normalize_identifier, normalize_name, normalize_vat, same_identifier, same_text,
    same_vat,
};
use crate::scoring::ScoreTrace;
use crate::similarity::token_set_similarity;

/// Seller-side values compared against each business partner.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerFeatures {
    pub vat_id: Option<String>,
    pub tax_number: Option<String>,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PartnerAdapter {
    boosts: BoostTable,
}

impl Default for PartnerAdapter {
    fn default() -> Self {
        Self::new(BoostTable::partner())
    }
}

impl PartnerAdapter {
    pub fn new(boosts: BoostTable) -> Self {
        Self { boosts }
    }

    pub fn boosts(&self) -> &BoostTable {
        &self.boosts
    }
}

impl EntityAdapter for PartnerAdapter {
    type Query = PartnerQuery;
    type Candidate = PartnerCandidate;
    type Features = PartnerFeatures;

    fn kind(&self) -> EntityKind {
        EntityKind::BusinessPartner
    }

    fn default_fallback(&self) -> &'static str {
        DEFAULT_PARTNER_FALLBACK
    }

    fn candidate_code<'a>(&self, candidate: &'a PartnerCandidate) -> Option<&'a str> {
        candidate.code()
    }

    fn describe_query(&self, query: &PartnerQuery) -> String {
        query.semantic_text()
    }

    fn describe_candidate(&self, candidate: &PartnerCandidate) -> String {
        candidate.semantic_text()
    }

    fn extract(&self, query: &PartnerQuery) -> PartnerFeatures {
        PartnerFeatures {
            vat_id: query.vat_id.as_deref().and_then(normalize_vat),
            tax_number: query.tax_number.as_deref().and_then(normalize_identifier),
            name: normalize_name(query.name.as_deref().unwrap_or_default().trim()),
            city: non_blank(query.city.as_deref()).map(str::to_string),
            country: non_blank(query.country.as_deref()).map(str::to_string),
        }
    }

    fn apply_boosts(
        &self,
        features: &PartnerFeatures,
        candidate: &PartnerCandidate,
        trace: &mut ScoreTrace,
    ) {
        let b = &self.boosts;

        trace.field_match(
            same_vat(features.vat_id.as_deref(), candidate.vat_id_num.as_deref()),
            "VAT",
            b.strong_id,
        );
        trace.field_match(
            same_identifier(
                features.tax_number.as_deref(),
                candidate.federal_tax_id.as_deref(),
            ),
            "TaxNr",
            b.secondary_id,
        );

        let candidate_name = normalize_name(candidate.card_name.as_deref().unwrap_or_default());
        trace.name_similarity(
            token_set_similarity(&features.name, &candidate_name),
            &b.name_tiers,
        );

        trace.field_match(
            same_text(features.city.as_deref(), candidate.first_city()),
            "City",
            b.city,
        );
        trace.field_match(
            same_text(features.country.as_deref(), candidate.first_country()),
            "Country",
            b.country,
        );
    }
}
