//! Language-model arbitration for indecisive rankings.
//!
//! The top candidates are rendered into one prompt together with the query's
//! description. The completion oracle is called once, without retry, and its
//! trimmed answer is taken as the code. The answer is not checked against the
//! shortlist: whatever non-blank text comes back is the result.


use std::fmt::Write as _;

use tracing::{debug, instrument};

use crate::constants::ARBITRATION_TOP_N;
use crate::entity::EntityKind;
use crate::oracle::{Completer, OracleResult};

/// One line of the arbitration shortlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlistEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub code: String,
    /// Semantic one-line description of the candidate.
    pub summary: String,
}

struct Vocabulary {
    subject: &'static str,
    catalog: &'static str,
    layout: &'static str,
    code_field: &'static str,
}

fn vocabulary(kind: EntityKind) -> Vocabulary {
    match kind {
        EntityKind::BusinessPartner => Vocabulary {
            subject: "a supplier from an invoice",
            catalog: "business partners",
            layout: "CardCode: Name | VAT | City | Country",
            code_field: "CardCode",
        },
        EntityKind::Item => Vocabulary {
            subject: "a billing line",
            catalog: "articles",
            layout: "ItemCode | ItemName | ForeignName | Barcode | SupplierCatalogNo | Group",
            code_field: "ItemCode",
        },
    }
}

/// Renders the arbitration prompt.
///
/// `fallback_code` is the token the model is told to answer with when no
/// candidate fits.
pub fn build_prompt(
    kind: EntityKind,
    query_text: &str,
    shortlist: &[ShortlistEntry],
    fallback_code: &str,
) -> String {
    let v = vocabulary(kind);
    let mut prompt = String::new();

    let _ = writeln!(prompt, "There is {} (semantic summary):", v.subject);
    let _ = writeln!(prompt, "\"{query_text}\"");
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "These are the {} most similar {} from the catalog ({}):",
        shortlist.len(),
        v.catalog,
        v.layout
    );
    for entry in shortlist {
        let _ = writeln!(prompt, "{}. {}: {}", entry.rank, entry.code, entry.summary);
    }
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "Only return the {} of the single best match.",
        v.code_field
    );
    let _ = write!(prompt, "If there is none, return '{fallback_code}'.");

    prompt
}

/// Asks the completion oracle to pick among the shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arbiter {
    top_n: usize,
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new(ARBITRATION_TOP_N)
    }
}

impl Arbiter {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Number of ranked candidates offered to the model.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Sends `prompt` once. `Ok(None)` when the answer is blank.
    #[instrument(skip(self, completer, prompt), fields(prompt_len = prompt.len()))]
    pub async fn arbitrate(
        &self,
        completer: &dyn Completer,
        prompt: &str,
    ) -> OracleResult<Option<String>> {
        let answer = completer.complete(prompt).await?;
        let pick = answer.trim();

        if pick.is_empty() {
            debug!("Arbitration answer was blank");
            return Ok(None);
        }

        debug!(pick, "Arbitration answered");
        Ok(Some(pick.to_string()))
    }
}
