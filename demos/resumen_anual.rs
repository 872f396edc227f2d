use chrono::NaiveDate;
use librofiscal::core::*;
use librofiscal::modelos::{Trimestre, aggregate};
use rust_decimal_macros::dec;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

fn main() {
    // A small year of activity: two clients, one supplier.
    let records = vec![
        FiscalRecordBuilder::new(RecordKind::Income, "A-25-1", date(1, 20))
            .counterparty("B12345674", "Estudio Diseño SL")
            .amounts(dec!(2500), dec!(21), dec!(525))
            .withholding(dec!(15), dec!(375))
            .income_category("Servicios profesionales")
            .build(),
        FiscalRecordBuilder::new(RecordKind::Income, "A-25-2", date(5, 12))
            .counterparty("12345678Z", "María García")
            .amounts(dec!(1800), dec!(21), dec!(378))
            .build(),
        FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date(2, 3))
            .counterparty("B87654321", "Coworking Centro SA")
            .amounts(dec!(300), dec!(21), dec!(63))
            .expense_categories("Arrendamientos", "Servicios")
            .build(),
    ];

    // Quarterly view, as filed.
    for t in Trimestre::ALL {
        let q = aggregate(&records, 2025, Some(t));
        println!(
            "{}: 303 resultado = {}, 130 resultado = {}",
            q.periodo.code(),
            q.modelo_303.resultado,
            q.modelo_130.resultado
        );
    }

    // Annual roll-up with the year-only declarations.
    let year = aggregate(&records, 2025, None);
    println!("\nAnual 303: {:?}", year.modelo_303);
    println!("Anual 130: {:?}", year.modelo_130);

    let m390 = year.modelo_390.unwrap();
    println!("390 desglose de IVA soportado:");
    for row in &m390.desglose {
        println!("  {}% → base {}, cuota {}", row.tipo, row.base, row.cuota);
    }

    let m190 = year.modelo_190.unwrap();
    println!("190 perceptores:");
    for p in &m190.perceptores {
        println!("  {} {} → base {}, retenido {}", p.tax_id, p.name, p.base, p.retenido);
    }
}
