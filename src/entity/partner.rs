use serde::{Deserialize, Serialize};

use super::SemanticLine;

/// Seller of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerQuery {
    /// Seller-side identifier printed on the invoice.
    pub id: Option<String>,
    /// Global identifier (GLN, DUNS, ...).
    pub global_id: Option<String>,
    /// Identifier of the seller's legal organization.
    pub legal_organization_id: Option<String>,
    pub name: Option<String>,
    /// Contact e-mail. Upstream schema variants are mapped onto this field by the parser.
    pub contact_email: Option<String>,
    pub contact_person: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// VAT registration (scheme `VA`).
    pub vat_id: Option<String>,
    /// National tax number (scheme `FC`).
    pub tax_number: Option<String>,
}

impl PartnerQuery {
    /// One-line description fed to the embedder and the arbitration prompt.
    pub fn semantic_text(&self) -> String {
        SemanticLine::new()
            .field("Code", self.id.as_deref())
            .field("Name", self.name.as_deref())
            .field("EmailAddress", self.contact_email.as_deref())
            .field("ContactPerson", self.contact_person.as_deref())
            .field("Street", self.street.as_deref())
            .field("ZipCode", self.postcode.as_deref())
            .field("City", self.city.as_deref())
            .field("Country", self.country.as_deref())
            .field("VatIDNum", self.vat_id.as_deref())
            .field("FederalTaxID", self.tax_number.as_deref())
            .finish()
    }
}

/// Business partner from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartnerCandidate {
    pub card_code: Option<String>,
    pub card_name: Option<String>,
    pub email_address: Option<String>,
    pub contact_person: Option<String>,
    #[serde(rename = "Address")]
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "HouseBankIBAN")]
    pub house_bank_iban: Option<String>,
    #[serde(rename = "FederalTaxID")]
    pub federal_tax_id: Option<String>,
    #[serde(rename = "VatIDNum")]
    pub vat_id_num: Option<String>,
    pub supplier_catalog_nr: Option<String>,
    #[serde(rename = "BPAddresses", default)]
    pub addresses: Vec<PartnerAddress>,
}

/// One entry of a business partner's address list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartnerAddress {
    pub address_name: Option<String>,
    pub address_type: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl PartnerCandidate {
    pub fn code(&self) -> Option<&str> {
        self.card_code.as_deref()
    }

    /// City of the first address entry.
    pub fn first_city(&self) -> Option<&str> {
        self.addresses.first().and_then(|a| a.city.as_deref())
    }

    /// Country of the first address entry.
    pub fn first_country(&self) -> Option<&str> {
        self.addresses.first().and_then(|a| a.country.as_deref())
    }

    pub fn semantic_text(&self) -> String {
        SemanticLine::new()
            .field("Code", self.card_code.as_deref())
            .field("Name", self.card_name.as_deref())
            .field("EmailAddress", self.email_address.as_deref())
            .field("ContactPerson", self.contact_person.as_deref())
            .field("Street", self.street.as_deref())
            .field("ZipCode", self.zip_code.as_deref())
            .field("City", self.city.as_deref())
            .field("Country", self.country.as_deref())
            .field("FederalTaxID", self.federal_tax_id.as_deref())
            .field("VatIDNum", self.vat_id_num.as_deref())
            .field("SupplierCatalogNr", self.supplier_catalog_nr.as_deref())
            .finish()
    }
}
