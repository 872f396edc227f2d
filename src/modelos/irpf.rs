//! IRPF summaries: Modelo 130 (quarterly advance payment), Modelo 111
//! (withholding remitted for suppliers) and Modelo 190 (annual summary of
//! withholding received from clients).

use std::collections::HashMap;
use std::ops::Add;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::latest_name;
use super::periodo::{Trimestre, in_trimestre, in_year};
use crate::core::{FiscalRecord, RecordKind, normalize_tax_id};

/// Advance-payment percentage applied to the quarterly net yield.
pub const TIPO_PAGO_FRACCIONADO: Decimal = dec!(20);

/// Modelo 130 — quarterly IRPF advance payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo130 {
    /// Σ `tax_base` over income.
    pub ingresos: Decimal,
    /// Σ `tax_base` over deductible expenses.
    pub gastos: Decimal,
    /// `ingresos - gastos`.
    pub rendimiento_neto: Decimal,
    /// `max(rendimiento_neto, 0) * 20%`; a loss quarter owes nothing.
    pub cuota: Decimal,
    /// Σ `withholding_amount` over income: retention already suffered.
    pub retenciones: Decimal,
    /// `cuota - retenciones`; negative means the retention exceeds the quota.
    pub resultado: Decimal,
}

impl Add for Modelo130 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            ingresos: self.ingresos + rhs.ingresos,
            gastos: self.gastos + rhs.gastos,
            rendimiento_neto: self.rendimiento_neto + rhs.rendimiento_neto,
            cuota: self.cuota + rhs.cuota,
            retenciones: self.retenciones + rhs.retenciones,
            resultado: self.resultado + rhs.resultado,
        }
    }
}

/// Quarterly Modelo 130 over the snapshot.
pub fn modelo_130(records: &[FiscalRecord], year: i32, trimestre: Trimestre) -> Modelo130 {
    let mut ingresos = Decimal::ZERO;
    let mut gastos = Decimal::ZERO;
    let mut retenciones = Decimal::ZERO;

    for r in records.iter().filter(|r| in_trimestre(r, year, trimestre)) {
        match r.kind {
            RecordKind::Income => {
                ingresos += r.tax_base;
                retenciones += r.withholding_amount;
            }
            RecordKind::Expense if r.deductible => gastos += r.tax_base,
            RecordKind::Expense => {}
        }
    }

    let rendimiento_neto = ingresos - gastos;
    let cuota = rendimiento_neto.max(Decimal::ZERO) * TIPO_PAGO_FRACCIONADO / dec!(100);

    Modelo130 {
        ingresos,
        gastos,
        rendimiento_neto,
        cuota,
        retenciones,
        resultado: cuota - retenciones,
    }
}

/// Annual Modelo 130 roll-up: field-wise sum of the four quarters. A loss
/// quarter contributes its zero `cuota` as declared, so the annual figure
/// matches the quarterly filings rather than an independent recomputation.
pub fn modelo_130_anual(records: &[FiscalRecord], year: i32) -> Modelo130 {
    Trimestre::ALL
        .iter()
        .map(|&t| modelo_130(records, year, t))
        .fold(Modelo130::default(), Add::add)
}

/// Modelo 111 — IRPF withholding remitted on supplier invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo111 {
    /// Σ `tax_base` over deductible expenses carrying a retention.
    pub base: Decimal,
    /// Σ `withholding_amount` over deductible expenses.
    pub retenido: Decimal,
}

impl Add for Modelo111 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            base: self.base + rhs.base,
            retenido: self.retenido + rhs.retenido,
        }
    }
}

/// Quarterly Modelo 111 over the snapshot.
pub fn modelo_111(records: &[FiscalRecord], year: i32, trimestre: Trimestre) -> Modelo111 {
    let mut m = Modelo111::default();
    for r in records.iter().filter(|r| {
        in_trimestre(r, year, trimestre) && r.kind == RecordKind::Expense && r.deductible
    }) {
        if r.withholding_amount != Decimal::ZERO {
            m.base += r.tax_base;
        }
        m.retenido += r.withholding_amount;
    }
    m
}

/// Annual Modelo 111 roll-up: field-wise sum of the four quarters.
pub fn modelo_111_anual(records: &[FiscalRecord], year: i32) -> Modelo111 {
    Trimestre::ALL
        .iter()
        .map(|&t| modelo_111(records, year, t))
        .fold(Modelo111::default(), Add::add)
}

/// One client in the Modelo 190 annual withholding summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perceptor190 {
    /// Normalized counterparty tax identifier.
    pub tax_id: String,
    /// Counterparty name from the group's most recent record.
    pub name: String,
    /// Σ `tax_base` of the group.
    pub base: Decimal,
    /// Σ `withholding_amount` of the group.
    pub retenido: Decimal,
}

/// Modelo 190 — annual summary of IRPF retention suffered, per client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelo190 {
    /// Clients that retained IRPF on income invoices, withholding
    /// descending then tax id.
    pub perceptores: Vec<Perceptor190>,
}

/// Annual Modelo 190 over the snapshot: income records with a positive
/// retention, grouped by normalized counterparty tax id.
pub fn modelo_190(records: &[FiscalRecord], year: i32) -> Modelo190 {
    let mut grupos: HashMap<String, Vec<&FiscalRecord>> = HashMap::new();

    for r in records.iter().filter(|r| {
        in_year(r, year) && r.kind == RecordKind::Income && r.withholding_amount > Decimal::ZERO
    }) {
        grupos
            .entry(normalize_tax_id(&r.counterparty.tax_id))
            .or_default()
            .push(r);
    }

    let mut perceptores: Vec<Perceptor190> = grupos
        .into_iter()
        .map(|(tax_id, group)| Perceptor190 {
            name: latest_name(&group),
            base: group.iter().map(|r| r.tax_base).sum(),
            retenido: group.iter().map(|r| r.withholding_amount).sum(),
            tax_id,
        })
        .collect();
    perceptores.sort_by(|a, b| b.retenido.cmp(&a.retenido).then(a.tax_id.cmp(&b.tax_id)));

    Modelo190 { perceptores }
}
