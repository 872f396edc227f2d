//! IVA summaries: Modelo 303 (periodic) and Modelo 390 (annual).

use std::collections::HashMap;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::periodo::{Trimestre, in_trimestre, in_year};
use crate::core::{FiscalRecord, RecordKind};

/// Modelo 303 — periodic VAT self-assessment.
///
/// Output VAT (devengado) is charged on every income record; input VAT
/// (soportado) is paid on deductible expenses. Amounts are the stored
/// `vat_amount`s summed at full precision, no rounding here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo303 {
    /// IVA devengado: Σ `vat_amount` over income.
    pub devengado: Decimal,
    /// IVA soportado: Σ `vat_amount` over deductible expenses.
    pub soportado: Decimal,
    /// `devengado - soportado`; negative means a refundable balance.
    pub resultado: Decimal,
}

impl Add for Modelo303 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            devengado: self.devengado + rhs.devengado,
            soportado: self.soportado + rhs.soportado,
            resultado: self.resultado + rhs.resultado,
        }
    }
}

/// Quarterly Modelo 303 over the snapshot.
pub fn modelo_303(records: &[FiscalRecord], year: i32, trimestre: Trimestre) -> Modelo303 {
    let mut devengado = Decimal::ZERO;
    let mut soportado = Decimal::ZERO;

    for r in records.iter().filter(|r| in_trimestre(r, year, trimestre)) {
        match r.kind {
            RecordKind::Income => devengado += r.vat_amount,
            RecordKind::Expense if r.deductible => soportado += r.vat_amount,
            RecordKind::Expense => {}
        }
    }

    Modelo303 {
        devengado,
        soportado,
        resultado: devengado - soportado,
    }
}

/// Annual Modelo 303 roll-up: the field-wise sum of the four quarters, so
/// the annual figure always equals the quarterly figures shown — never an
/// independent recomputation that could drift.
pub fn modelo_303_anual(records: &[FiscalRecord], year: i32) -> Modelo303 {
    Trimestre::ALL
        .iter()
        .map(|&t| modelo_303(records, year, t))
        .fold(Modelo303::default(), Add::add)
}

/// One row of the Modelo 390 deductible-expense breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesgloseIva {
    /// VAT rate this row groups.
    pub tipo: Decimal,
    /// Σ `tax_base` of deductible expenses at this rate.
    pub base: Decimal,
    /// Σ `vat_amount` of deductible expenses at this rate.
    pub cuota: Decimal,
}

/// Modelo 390 — annual VAT summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo390 {
    /// Annual totals, identical to the annual Modelo 303 roll-up.
    pub resumen: Modelo303,
    /// Deductible-expense `(base, cuota)` per VAT rate, rate descending.
    /// Empty when the year has no deductible expenses.
    pub desglose: Vec<DesgloseIva>,
}

/// Annual Modelo 390 over the snapshot.
pub fn modelo_390(records: &[FiscalRecord], year: i32) -> Modelo390 {
    let mut grupos: HashMap<Decimal, (Decimal, Decimal)> = HashMap::new();

    for r in records.iter().filter(|r| {
        in_year(r, year) && r.kind == RecordKind::Expense && r.deductible
    }) {
        let (base, cuota) = grupos.entry(r.vat_rate).or_insert((Decimal::ZERO, Decimal::ZERO));
        *base += r.tax_base;
        *cuota += r.vat_amount;
    }

    let mut desglose: Vec<DesgloseIva> = grupos
        .into_iter()
        .map(|(tipo, (base, cuota))| DesgloseIva { tipo, base, cuota })
        .collect();
    desglose.sort_by(|a, b| b.tipo.cmp(&a.tipo));

    Modelo390 {
        resumen: modelo_303_anual(records, year),
        desglose,
    }
}
