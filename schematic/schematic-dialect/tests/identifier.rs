use schematic_dialect::{CaseFolding, Dialect};

#[test]
fn plain_identifiers_are_left_bare() {
    let rules = Dialect::redshift().identifiers;
    for name in ["id", "order_total", "_tmp", "col2"] {
        assert!(!rules.needs_quoting(name), "{name}");
        assert_eq!(rules.quote(name), name);
    }
}

#[test]
fn reserved_words_are_quoted_case_insensitively() {
    let rules = Dialect::redshift().identifiers;
    assert!(rules.is_reserved("SELECT"));
    assert_eq!(rules.quote("select"), "\"select\"");
    assert_eq!(rules.quote("user"), "\"user\"");
}

#[test]
fn irregular_identifiers_are_quoted() {
    let rules = Dialect::redshift().identifiers;
    assert_eq!(rules.quote("order total"), "\"order total\"");
    assert_eq!(rules.quote("1st"), "\"1st\"");
    assert_eq!(rules.quote("Amount"), "\"Amount\"");
    assert_eq!(rules.quote(""), "\"\"");
    assert_eq!(rules.quote("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn case_folding_follows_dialect() {
    let oracle = Dialect::oracle().identifiers;
    assert_eq!(oracle.folding, CaseFolding::Upper);
    assert_eq!(oracle.quote("AMOUNT"), "AMOUNT");
    assert_eq!(oracle.quote("amount"), "\"amount\"");

    let mut preserving = Dialect::postgres().identifiers;
    preserving.folding = CaseFolding::Preserve;
    assert_eq!(preserving.quote("Amount"), "Amount");
}
