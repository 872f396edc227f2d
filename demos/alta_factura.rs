use chrono::NaiveDate;
use librofiscal::core::*;
use librofiscal::store::{MemoryStore, RecordStore};
use rust_decimal_macros::dec;

fn main() {
    let mut store = MemoryStore::new();

    // The sequencer proposes the next number from the current snapshot.
    let snapshot = store.list_all();
    let number = next_document_number(&snapshot, RecordKind::Income, 2025);
    println!("número propuesto: {number}");

    let draft = FiscalRecordBuilder::new(
        RecordKind::Income,
        &number,
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    )
    .id("f-001")
    .counterparty("12345678Z", "Cliente Ejemplo")
    .amounts(dec!(1200), dec!(21), dec!(252))
    .withholding(dec!(15), dec!(180))
    .build();

    // The guard classifies; the caller decides.
    let check = check_before_save(&draft, &snapshot, false);
    println!("bloqueantes: {}, avisos: {}", check.blocking.len(), check.advisory.len());

    store.insert(draft).expect("clean draft saves");

    // A duplicate number for the same kind is refused at the write boundary.
    let duplicate = FiscalRecordBuilder::new(
        RecordKind::Income,
        &number,
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
    )
    .id("f-002")
    .counterparty("X1234567L", "Otro Cliente")
    .build();

    match store.insert(duplicate) {
        Err(err) => println!("rechazado: {err}"),
        Ok(()) => unreachable!(),
    }

    // An expense with a foreign VAT id saves with an advisory flag.
    let foreign = FiscalRecordBuilder::new(
        RecordKind::Expense,
        "R-25-1",
        NaiveDate::from_ymd_opt(2025, 3, 21).unwrap(),
    )
    .id("g-001")
    .counterparty("DE123456789", "Cloud Anbieter GmbH")
    .amounts(dec!(50), dec!(0), dec!(0))
    .build();

    let advisory = check_before_save(&foreign, &store.list_all(), false);
    for issue in &advisory.advisory {
        println!("aviso: {issue}");
    }
    store.insert(foreign).expect("advisory issues do not block");

    println!("registros almacenados: {}", store.len());
}
