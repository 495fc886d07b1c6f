//! Identifier and name canonicalization.
//!
//! Every function here is pure and idempotent: feeding a normalized value back
//! in returns it unchanged. Blank input yields `None` (identifiers) or an empty
//! string (names and plain text).

#[cfg(test)]
mod tests;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Legal-form tokens removed from business names before comparison.
const LEGAL_FORM_TOKENS: &[&str] = &[
    "gmbh", "ag", "kg", "mbh", "co", "ohg", "ug", "limited", "ltd", "sarl", "srl", "spa", "bv",
    "nv", "ab", "oy", "as", "aps", "kft", "sro", "spzoo", "ou",
];

/// Tax numbers, external codes and other free identifiers.
///
/// Drops whitespace, `.` and `-`, then upper-cases.
pub fn normalize_identifier(s: &str) -> Option<String> {
    strip_upper(s, |c| c.is_whitespace() || c == '.' || c == '-')
}

/// Barcodes (EAN/GTIN). Dots are kept.
pub fn normalize_barcode(s: &str) -> Option<String> {
    strip_upper(s, |c| c.is_whitespace() || c == '-')
}

/// VAT registration numbers.
pub fn normalize_vat(s: &str) -> Option<String> {
    strip_upper(s, |c| c.is_whitespace() || c == '-')
}

fn strip_upper(s: &str, drop: impl Fn(char) -> bool) -> Option<String> {
    let out: String = s
        .trim()
        .chars()
        .filter(|&c| !drop(c))
        .flat_map(char::to_uppercase)
        .collect();

    (!out.is_empty()).then_some(out)
}

/// Business-partner names: case-folded, diacritics and punctuation removed,
/// legal-form tokens dropped.
pub fn normalize_name(s: &str) -> String {
    fold_tokens(s)
        .into_iter()
        .filter(|token| !LEGAL_FORM_TOKENS.contains(&token.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Item names. Same folding as [`normalize_name`] but legal-form tokens are kept,
/// since "AG" or "KG" can be part of a product designation.
pub fn normalize_item_name(s: &str) -> String {
    fold_tokens(s).join(" ")
}

fn fold_tokens(s: &str) -> Vec<String> {
    let folded: String = s
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    folded.split_whitespace().map(str::to_owned).collect()
}

/// City and country values: lower-cased with collapsed whitespace.
pub fn normalize_plain_text(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Both identifiers are present and equal after [`normalize_identifier`].
pub fn same_identifier(a: Option<&str>, b: Option<&str>) -> bool {
    same_by(a, b, normalize_identifier)
}

/// Both VAT numbers are present and equal after [`normalize_vat`].
pub fn same_vat(a: Option<&str>, b: Option<&str>) -> bool {
    same_by(a, b, normalize_vat)
}

/// Both barcodes are present and equal after [`normalize_barcode`].
pub fn same_barcode(a: Option<&str>, b: Option<&str>) -> bool {
    same_by(a, b, normalize_barcode)
}

/// Both values are non-blank and equal after [`normalize_plain_text`].
pub fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    same_by(a, b, |s| {
        let n = normalize_plain_text(s);
        (!n.is_empty()).then_some(n)
    })
}

fn same_by(a: Option<&str>, b: Option<&str>, norm: impl Fn(&str) -> Option<String>) -> bool {
    match (a.and_then(&norm), b.and_then(&norm)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// `Some(trimmed)` when `s` holds anything but whitespace.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}
