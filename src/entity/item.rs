use serde::{Deserialize, Serialize};

use super::SemanticLine;
use crate::constants::FIELD_SEPARATOR;

/// One invoice line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemQuery {
    /// Article number assigned by the seller.
    pub seller_assigned_id: Option<String>,
    /// Article number assigned by the buyer (often the catalog item code).
    pub buyer_assigned_id: Option<String>,
    /// Global trade identifier of the article.
    pub global_id: Option<String>,
    pub name: Option<String>,
    /// First note attached to the line, used as an alternate name.
    pub foreign_name: Option<String>,
    /// First product classification of the line, carrying the barcode.
    pub barcode: Option<String>,
}

impl LineItemQuery {
    pub fn semantic_text(&self) -> String {
        SemanticLine::new()
            .field("ItemCode", self.seller_assigned_id.as_deref())
            .field("Name", self.name.as_deref())
            .field("ForeignName", self.foreign_name.as_deref())
            .field("Barcode", self.barcode.as_deref())
            .field("SupplierNo", self.global_id.as_deref())
            .field("ProductGroup", self.buyer_assigned_id.as_deref())
            .finish()
    }

    /// Raw identifiers joined as-is; used when [`Self::semantic_text`] is blank.
    pub fn fallback_text(&self) -> String {
        [
            self.buyer_assigned_id.as_deref(),
            self.seller_assigned_id.as_deref(),
            self.name.as_deref(),
        ]
        .map(Option::unwrap_or_default)
        .join(FIELD_SEPARATOR)
    }
}

/// Article from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCandidate {
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub foreign_name: Option<String>,
    pub barcode: Option<String>,
    pub supplier_catalog_no: Option<String>,
    #[serde(rename = "ItemGroups")]
    pub item_group: Option<ItemGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemGroup {
    pub group_name: Option<String>,
}

impl ItemCandidate {
    pub fn code(&self) -> Option<&str> {
        self.item_code.as_deref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.item_group.as_ref().and_then(|g| g.group_name.as_deref())
    }

    /// All names a line could be matched against.
    pub fn name_variants(&self) -> [Option<&str>; 3] {
        [
            self.item_name.as_deref(),
            self.foreign_name.as_deref(),
            self.group_name(),
        ]
    }

    pub fn semantic_text(&self) -> String {
        SemanticLine::new()
            .field("Code", self.item_code.as_deref())
            .field("Name", self.item_name.as_deref())
            .field("ForeignName", self.foreign_name.as_deref())
            .field("Barcode", self.barcode.as_deref())
            .field("SupplierCatalogNo", self.supplier_catalog_no.as_deref())
            .field("ProductGroup", self.group_name())
            .finish()
    }
}
