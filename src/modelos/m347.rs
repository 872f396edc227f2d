//! Modelo 347 — annual declaration of third-party operations above the
//! statutory threshold.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::latest_name;
use super::periodo::in_year;
use crate::core::{FiscalRecord, RecordKind, normalize_tax_id};

/// Statutory threshold: a counterparty is declared only when its yearly
/// operations total strictly exceeds this amount. A group at exactly the
/// threshold is excluded entirely, not partially counted.
pub const UMBRAL_347: Decimal = dec!(3005.06);

/// One declared counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operacion347 {
    /// Normalized counterparty tax identifier.
    pub tax_id: String,
    /// Counterparty name from the group's most recent record.
    pub name: String,
    /// Σ `|total_amount|` of the group's records.
    pub total: Decimal,
    /// Dominant side of the relationship: the kind contributing the larger
    /// share of the total (income wins ties).
    pub kind: RecordKind,
}

/// Modelo 347 — annual third-party operations declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo347 {
    /// Counterparties over the threshold, total descending then tax id.
    pub operaciones: Vec<Operacion347>,
}

/// Annual Modelo 347 over the snapshot. Groups all records of the year,
/// both kinds, by normalized counterparty tax id.
pub fn modelo_347(records: &[FiscalRecord], year: i32) -> Modelo347 {
    let mut grupos: HashMap<String, Vec<&FiscalRecord>> = HashMap::new();

    for r in records.iter().filter(|r| in_year(r, year)) {
        grupos
            .entry(normalize_tax_id(&r.counterparty.tax_id))
            .or_default()
            .push(r);
    }

    let mut operaciones: Vec<Operacion347> = grupos
        .into_iter()
        .filter_map(|(tax_id, group)| {
            let mut ingresos = Decimal::ZERO;
            let mut gastos = Decimal::ZERO;
            for r in &group {
                match r.kind {
                    RecordKind::Income => ingresos += r.total_amount.abs(),
                    RecordKind::Expense => gastos += r.total_amount.abs(),
                }
            }
            let total = ingresos + gastos;
            if total <= UMBRAL_347 {
                return None;
            }
            Some(Operacion347 {
                name: latest_name(&group),
                total,
                kind: if gastos > ingresos {
                    RecordKind::Expense
                } else {
                    RecordKind::Income
                },
                tax_id,
            })
        })
        .collect();
    operaciones.sort_by(|a, b| b.total.cmp(&a.total).then(a.tax_id.cmp(&b.tax_id)));

    Modelo347 { operaciones }
}
