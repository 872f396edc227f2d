//! Edge cases: hostile identifiers, odd numbering input, and aggregation
//! over data the guard would normally have flagged.

use chrono::NaiveDate;
use librofiscal::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// --- Identifier edge cases ---

#[test]
fn unicode_and_embedded_whitespace_rejected() {
    assert_eq!(validate_tax_id("１２３４５６７８Z"), TaxIdValidation::UnrecognizedFormat);
    assert_eq!(validate_tax_id("1234 5678Z"), TaxIdValidation::UnrecognizedFormat);
    assert_eq!(validate_tax_id("12345678\u{200b}Z"), TaxIdValidation::UnrecognizedFormat);
}

#[test]
fn nine_letter_garbage_rejected() {
    assert_eq!(validate_tax_id("ABCDEFGHI"), TaxIdValidation::UnrecognizedFormat);
}

#[test]
fn cif_trailing_control_may_be_digit_or_letter() {
    assert_eq!(validate_tax_id("A12345678"), TaxIdValidation::Valid(TaxIdKind::Cif));
    assert_eq!(validate_tax_id("W1234567B"), TaxIdValidation::Valid(TaxIdKind::Cif));
}

// --- Numbering edge cases ---

#[test]
fn malformed_numbers_in_the_store_are_ignored() {
    let mut records = Vec::new();
    for number in ["A-25", "A-25-3-1", "A--25-3", "a-25-3", "A-25-٣", "A-25- 3"] {
        records.push(
            FiscalRecordBuilder::new(RecordKind::Income, number, date(2025, 1, 5))
                .counterparty("12345678Z", "Cliente SL")
                .build(),
        );
    }
    assert_eq!(next_document_number(&records, RecordKind::Income, 2025), "A-25-1");
}

#[test]
fn large_sequence_numbers_survive() {
    let records = vec![
        FiscalRecordBuilder::new(RecordKind::Income, "A-25-999999", date(2025, 1, 5))
            .counterparty("12345678Z", "Cliente SL")
            .build(),
    ];
    assert_eq!(
        next_document_number(&records, RecordKind::Income, 2025),
        "A-25-1000000"
    );
}

#[test]
fn single_digit_years_pad_to_two() {
    assert_eq!(next_document_number(&[], RecordKind::Expense, 2009), "R-09-1");
}

// --- Aggregation over hostile data ---

#[cfg(feature = "modelos")]
mod aggregation {
    use super::*;
    use librofiscal::modelos::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_amounts_flow_through_without_panicking() {
        // A credit/rectification stored as a negative income record.
        let records = vec![
            FiscalRecordBuilder::new(RecordKind::Income, "A-25-1", date(2025, 2, 1))
                .counterparty("12345678Z", "Cliente SL")
                .amounts(dec!(-1000), dec!(21), dec!(-210))
                .build(),
            FiscalRecordBuilder::new(RecordKind::Income, "A-25-2", date(2025, 2, 10))
                .counterparty("12345678Z", "Cliente SL")
                .amounts(dec!(400), dec!(21), dec!(84))
                .build(),
        ];

        let m303 = modelo_303(&records, 2025, Trimestre::T1);
        assert_eq!(m303.devengado, dec!(-126));

        let m130 = modelo_130(&records, 2025, Trimestre::T1);
        assert_eq!(m130.rendimiento_neto, dec!(-600));
        // A loss quarter owes no advance payment.
        assert_eq!(m130.cuota, Decimal::ZERO);
    }

    #[test]
    fn zero_rate_expenses_form_their_own_breakdown_row() {
        let records = vec![
            FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date(2025, 1, 15))
                .counterparty("B12345674", "Seguros SA")
                .amounts(dec!(300), dec!(0), dec!(0))
                .build(),
        ];
        let m390 = modelo_390(&records, 2025);
        assert_eq!(m390.desglose.len(), 1);
        assert_eq!(m390.desglose[0].tipo, dec!(0));
        assert_eq!(m390.desglose[0].base, dec!(300));
        assert_eq!(m390.desglose[0].cuota, dec!(0));
    }

    #[test]
    fn counterparty_ids_group_case_insensitively() {
        let a = FiscalRecordBuilder::new(RecordKind::Income, "A-25-1", date(2025, 1, 1))
            .counterparty("b12345674", "Caso SL")
            .total(dec!(2000))
            .build();
        let b = FiscalRecordBuilder::new(RecordKind::Income, "A-25-2", date(2025, 2, 1))
            .counterparty(" B12345674 ", "Caso SL")
            .total(dec!(2000))
            .build();

        let m347 = modelo_347(&[a, b], 2025);
        assert_eq!(m347.operaciones.len(), 1);
        assert_eq!(m347.operaciones[0].tax_id, "B12345674");
        assert_eq!(m347.operaciones[0].total, dec!(4000));
    }

    #[test]
    fn other_years_never_leak_into_a_summary() {
        let records = vec![
            FiscalRecordBuilder::new(RecordKind::Income, "A-24-1", date(2024, 12, 31))
                .counterparty("12345678Z", "Cliente SL")
                .amounts(dec!(5000), dec!(21), dec!(1050))
                .build(),
            FiscalRecordBuilder::new(RecordKind::Income, "A-26-1", date(2026, 1, 1))
                .counterparty("12345678Z", "Cliente SL")
                .amounts(dec!(5000), dec!(21), dec!(1050))
                .build(),
        ];
        let year = aggregate(&records, 2025, None);
        assert_eq!(year.modelo_303.devengado, Decimal::ZERO);
        assert!(year.modelo_347.unwrap().operaciones.is_empty());
    }
}
