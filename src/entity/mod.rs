//! Query and candidate records for both entity kinds.
//!
//! Queries come from the invoice parser, candidates from the business-system
//! catalog. Both are read-only inside the engine. Candidate field names follow
//! the catalog's JSON so a catalog page deserializes directly.

pub mod item;
pub mod partner;


pub use item::{ItemCandidate, ItemGroup, LineItemQuery};
pub use partner::{PartnerAddress, PartnerCandidate, PartnerQuery};

use serde::{Deserialize, Serialize};

use crate::constants::FIELD_SEPARATOR;
use crate::normalize::non_blank;

/// The two kinds of entity the engine resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Invoice seller against catalog business partners.
    BusinessPartner,
    /// Invoice line against catalog items.
    Item,
}

impl EntityKind {
    /// Short tag used as a prefix in event messages.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::BusinessPartner => "BP",
            EntityKind::Item => "ITM",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::BusinessPartner => write!(f, "business partner"),
            EntityKind::Item => write!(f, "item"),
        }
    }
}

/// Builds a `Label: value | Label: value` description, skipping blank values.
#[derive(Debug, Default)]
pub(crate) struct SemanticLine {
    parts: Vec<String>,
}

impl SemanticLine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn field(mut self, label: &str, value: Option<&str>) -> Self {
        if let Some(value) = non_blank(value) {
            self.parts.push(format!("{label}: {value}"));
        }
        self
    }

    pub(crate) fn finish(self) -> String {
        self.parts.join(FIELD_SEPARATOR)
    }
}
