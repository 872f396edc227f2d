use chrono::NaiveDate;
use librofiscal::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn income(number: &str, d: NaiveDate) -> FiscalRecord {
    FiscalRecordBuilder::new(RecordKind::Income, number, d)
        .counterparty("12345678Z", "Cliente SL")
        .counterparty_address("Calle Mayor 1, Madrid")
        .amounts(dec!(1000), dec!(21), dec!(210))
        .withholding(dec!(15), dec!(150))
        .income_category("Servicios profesionales")
        .build()
}

// --- Builder ---

#[test]
fn builder_defaults_total_from_stored_amounts() {
    let r = income("A-25-1", date(2025, 1, 10));
    // 1000 + 210 - 150
    assert_eq!(r.total_amount, dec!(1060));
    assert_eq!(r.kind, RecordKind::Income);
    assert!(!r.deductible);
}

#[test]
fn builder_keeps_supplied_total_verbatim() {
    let r = FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date(2025, 1, 10))
        .counterparty("B12345674", "Proveedor SL")
        .amounts(dec!(100), dec!(21), dec!(21))
        .total(dec!(999.99))
        .build();
    // Stored totals are trusted, never re-derived.
    assert_eq!(r.total_amount, dec!(999.99));
    assert!(r.deductible);
}

#[test]
fn series_prefix_round_trips() {
    for kind in [RecordKind::Income, RecordKind::Expense] {
        assert_eq!(RecordKind::from_series_prefix(kind.series_prefix()), Some(kind));
    }
    assert_eq!(RecordKind::from_series_prefix('Z'), None);
}

// --- Guard + sequencer flow ---

#[test]
fn proposed_number_passes_the_guard() {
    let existing = vec![income("A-25-1", date(2025, 1, 10))];
    let number = next_document_number(&existing, RecordKind::Income, 2025);
    assert_eq!(number, "A-25-2");

    let draft = income(&number, date(2025, 2, 1));
    assert!(check_before_save(&draft, &existing, false).is_clean());
}

#[test]
fn untrusted_extraction_goes_through_the_same_guard() {
    // A record proposed by document extraction is treated exactly like
    // user-typed input — same guard, no separate trust tier.
    let extracted = FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date(2025, 3, 3))
        .counterparty("GB999999973", "Foreign Supplier Ltd")
        .amounts(dec!(200), dec!(0), dec!(0))
        .build();
    let check = check_before_save(&extracted, &[], false);
    assert!(check.can_save());
    assert_eq!(check.advisory.len(), 1);
}

// --- Serde ---

#[test]
fn record_serde_round_trip() {
    let r = income("A-25-1", date(2025, 1, 10));
    let json = serde_json::to_string(&r).unwrap();
    // Decimal serializes as a string, so no precision is lost in transit.
    assert!(json.contains("\"1000\""));
    let back: FiscalRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.tax_base, r.tax_base);
    assert_eq!(back.document_number, r.document_number);
    assert_eq!(back.issue_date, r.issue_date);
}

#[test]
fn validation_outcome_serializes_for_the_form_layer() {
    let check = check_before_save(
        &FiscalRecordBuilder::new(RecordKind::Income, "", date(2025, 1, 1)).build(),
        &[],
        false,
    );
    let json = serde_json::to_string(&check).unwrap();
    let back: SaveCheck = serde_json::from_str(&json).unwrap();
    assert_eq!(back.blocking.len(), check.blocking.len());
}
