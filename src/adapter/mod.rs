//! Entity adapters: what the generic engine needs to know about one entity kind.
//!
//! An adapter supplies the field extractors (candidate code, semantic
//! descriptions, query features) and a [`BoostTable`]. The engine in
//! [`crate::resolver`] is written once against [`EntityAdapter`]; the partner
//! and item resolvers differ only in the adapter they carry.

pub mod item;
pub mod partner;


pub use item::ItemAdapter;
pub use partner::PartnerAdapter;

use crate::constants::{
    BARCODE_BOOST, BUYER_ID_BOOST, CITY_BOOST, COUNTRY_BOOST, NAME_SIMILARITY_TIERS,
    SUPPLIER_CATALOG_BOOST, TAX_NUMBER_BOOST, VAT_BOOST,
};
use crate::entity::EntityKind;
use crate::scoring::ScoreTrace;

/// Boost weights for the deterministic signals of one entity kind.
///
/// A zero weight disables the signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostTable {
    /// VAT (partners) or supplier catalog number (items).
    pub strong_id: f64,
    /// Tax number (partners) or barcode (items).
    pub secondary_id: f64,
    /// Buyer-assigned id against the candidate code (items only).
    pub cross_id: f64,
    /// `(threshold, boost)` pairs, highest threshold first.
    pub name_tiers: [(f64, f64); 3],
    pub city: f64,
    pub country: f64,
}

impl BoostTable {
    pub fn partner() -> Self {
        Self {
            strong_id: VAT_BOOST,
            secondary_id: TAX_NUMBER_BOOST,
            cross_id: 0.0,
            name_tiers: NAME_SIMILARITY_TIERS,
            city: CITY_BOOST,
            country: COUNTRY_BOOST,
        }
    }

    pub fn item() -> Self {
        Self {
            strong_id: SUPPLIER_CATALOG_BOOST,
            secondary_id: BARCODE_BOOST,
            cross_id: BUYER_ID_BOOST,
            name_tiers: NAME_SIMILARITY_TIERS,
            city: 0.0,
            country: 0.0,
        }
    }
}

/// Field extraction and boost rules for one entity kind.
pub trait EntityAdapter: Send + Sync {
    type Query: Send + Sync;
    type Candidate: Send + Sync;
    /// Query values normalized once per resolution and reused for every candidate.
    type Features: Send + Sync;

    fn kind(&self) -> EntityKind;

    /// Code returned when no tier resolves and the caller configured none.
    fn default_fallback(&self) -> &'static str;

    fn candidate_code<'a>(&self, candidate: &'a Self::Candidate) -> Option<&'a str>;

    /// Description embedded for the query and quoted in the arbitration prompt.
    fn describe_query(&self, query: &Self::Query) -> String;

    /// Description embedded for the catalog index and listed in the arbitration prompt.
    fn describe_candidate(&self, candidate: &Self::Candidate) -> String;

    fn extract(&self, query: &Self::Query) -> Self::Features;

    /// Records every deterministic signal that fires for `candidate`.
    fn apply_boosts(
        &self,
        features: &Self::Features,
        candidate: &Self::Candidate,
        trace: &mut ScoreTrace,
    );

    /// Whether resolution should stop before embedding when no candidate has a vector.
    fn requires_scorable_candidates(&self) -> bool {
        false
    }
}
