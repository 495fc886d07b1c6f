//! Scoring weights, gate thresholds and default codes shared across modules.
//!
//! The boost tables in [`crate::adapter`] and the gate defaults in
//! [`crate::decision`] are built from these values. Keep secondary values
//! derived from these rather than repeating literals.

/// Weight applied to the raw cosine similarity before boosts are added.
pub const COSINE_WEIGHT: f64 = 0.70;

/// Upper bound of a final candidate score.
pub const MAX_SCORE: f64 = 1.0;

/// Best score that is accepted regardless of the runner-up.
pub const DEFAULT_ACCEPT_SCORE: f64 = 0.85;

/// Best score that is accepted when the margin over the runner-up is large enough.
pub const DEFAULT_MARGIN_SCORE: f64 = 0.75;

/// Minimum margin over the runner-up for [`DEFAULT_MARGIN_SCORE`] acceptance.
pub const DEFAULT_MIN_DELTA: f64 = 0.10;

/// Number of candidates handed to the arbitration model.
pub const ARBITRATION_TOP_N: usize = 3;

/// Name similarity tiers, highest first: (threshold, boost).
pub const NAME_SIMILARITY_TIERS: [(f64, f64); 3] = [(0.90, 0.20), (0.75, 0.10), (0.50, 0.05)];

pub const VAT_BOOST: f64 = 0.50;
pub const TAX_NUMBER_BOOST: f64 = 0.20;
pub const CITY_BOOST: f64 = 0.05;
pub const COUNTRY_BOOST: f64 = 0.05;

pub const SUPPLIER_CATALOG_BOOST: f64 = 0.50;
pub const BARCODE_BOOST: f64 = 0.50;
pub const BUYER_ID_BOOST: f64 = 0.30;

/// Business-partner code returned when nothing else resolves.
pub const DEFAULT_PARTNER_FALLBACK: &str = "V10000";

/// Item code returned when nothing else resolves.
pub const DEFAULT_ITEM_FALLBACK: &str = "E10000";

/// Separator between fields of a semantic one-line description.
pub const FIELD_SEPARATOR: &str = " | ";
