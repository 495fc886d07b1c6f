use super::*;

#[test]
fn test_normalize_identifier_strips_separators() {
    assert_eq!(
        normalize_identifier(" de 123.456-789 "),
        Some("DE123456789".to_string())
    );
    assert_eq!(normalize_identifier("12/345/67890"), Some("12/345/67890".to_string()));
}

#[test]
fn test_normalize_identifier_blank_is_none() {
    assert_eq!(normalize_identifier(""), None);
    assert_eq!(normalize_identifier("   "), None);
    assert_eq!(normalize_identifier(" .-. "), None);
}

#[test]
fn test_normalize_barcode_keeps_dots() {
    assert_eq!(
        normalize_barcode("4006-381 333.931"),
        Some("4006381333.931".to_string())
    );
    assert_eq!(normalize_barcode("\t"), None);
}

#[test]
fn test_normalize_vat() {
    assert_eq!(
        normalize_vat("DE 123 456 789"),
        Some("DE123456789".to_string())
    );
    assert_eq!(normalize_vat("at-u12345678"), Some("ATU12345678".to_string()));
}

#[test]
fn test_normalize_identifier_idempotent() {
    for raw in ["de 123.456-789", "  x-1 ", "ß-straße", "ABC", "1.2.3", "ñ"] {
        let once = normalize_identifier(raw).unwrap();
        assert_eq!(normalize_identifier(&once), Some(once.clone()), "input {raw:?}");
    }
}

#[test]
fn test_normalize_name_drops_legal_forms() {
    assert_eq!(normalize_name("Müller & Söhne GmbH"), "muller sohne");
    assert_eq!(normalize_name("ACME Ltd."), "acme");
    assert_eq!(normalize_name("Schmidt GmbH & Co. KG"), "schmidt");
    assert_eq!(normalize_name("Tallinn Trade OÜ"), "tallinn trade");
}

#[test]
fn test_normalize_name_keeps_embedded_tokens() {
    assert_eq!(normalize_name("Cobalt Agrar"), "cobalt agrar");
}

#[test]
fn test_normalize_name_blank() {
    assert_eq!(normalize_name(""), "");
    assert_eq!(normalize_name(" - , . "), "");
    assert_eq!(normalize_name("GmbH"), "");
}

#[test]
fn test_normalize_name_idempotent() {
    for raw in [
        "Müller & Söhne GmbH",
        "  Crème   Brûlée SARL ",
        "ＡＣＭＥ Corp",
        "Straße 12-b",
        "İstanbul Tekstil A.Ş.",
    ] {
        let once = normalize_name(raw);
        assert_eq!(normalize_name(&once), once, "input {raw:?}");
    }
}

#[test]
fn test_normalize_item_name_keeps_legal_tokens() {
    assert_eq!(normalize_item_name("Filter AG-200, blau"), "filter ag 200 blau");
}

#[test]
fn test_normalize_plain_text() {
    assert_eq!(normalize_plain_text("  Frankfurt   am Main "), "frankfurt am main");
    assert_eq!(normalize_plain_text("DE"), "de");
    assert_eq!(normalize_plain_text("   "), "");
}

#[test]
fn test_same_identifier() {
    assert!(same_identifier(Some("12-345.6"), Some(" 123456 ")));
    assert!(!same_identifier(Some("123"), Some("124")));
    assert!(!same_identifier(None, None));
    assert!(!same_identifier(Some(""), Some("")));
    assert!(!same_identifier(Some("  "), Some("123")));
}

#[test]
fn test_same_vat() {
    assert!(same_vat(Some("DE 123 456 789"), Some("de123456789")));
    assert!(!same_vat(Some(" "), Some(" ")));
}

#[test]
fn test_same_barcode() {
    assert!(same_barcode(Some("4006381-333931"), Some("4006381333931")));
    assert!(!same_barcode(Some("4006.381"), Some("4006381")));
}

#[test]
fn test_same_text() {
    assert!(same_text(Some("Berlin "), Some("berlin")));
    assert!(same_text(Some("New   York"), Some("new york")));
    assert!(!same_text(Some(""), Some("")));
    assert!(!same_text(Some("Berlin"), None));
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank(Some("  a ")), Some("a"));
    assert_eq!(non_blank(Some("  ")), None);
    assert_eq!(non_blank(None), None);
}
