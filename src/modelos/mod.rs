//! The fiscal aggregation engine: Modelo 303, 390, 130, 111, 347 and 190
//! summaries over a record snapshot.
//!
//! Every function here is a total, pure projection: the empty set yields
//! zero-valued summaries, negative amounts flow through the sums, and
//! nothing is rounded — rounding to currency precision is the rendering
//! layer's concern, so repeated aggregation is reproducible bit for bit.
//!
//! Quarterly figures are primary; annual 303/130/111 figures are the
//! field-wise sum of the four quarters, never an independent recomputation.

mod irpf;
mod iva;
mod m347;
mod periodo;

pub use irpf::*;
pub use iva::*;
pub use m347::*;
pub use periodo::*;

use serde::{Deserialize, Serialize};

use crate::core::FiscalRecord;

/// The bundle of statutory summaries for one declaration period.
///
/// The annual-only models (390, 347, 190) are `None` for quarterly periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalSummary {
    pub year: i32,
    pub periodo: Periodo,
    pub modelo_303: Modelo303,
    pub modelo_130: Modelo130,
    pub modelo_111: Modelo111,
    pub modelo_390: Option<Modelo390>,
    pub modelo_347: Option<Modelo347>,
    pub modelo_190: Option<Modelo190>,
}

/// Aggregate a record snapshot into the summaries for a year, or for one
/// quarter of it.
///
/// ```
/// use chrono::NaiveDate;
/// use librofiscal::core::*;
/// use librofiscal::modelos::{aggregate, Trimestre};
/// use rust_decimal_macros::dec;
///
/// let records = vec![
///     FiscalRecordBuilder::new(RecordKind::Income, "A-25-1", NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
///         .counterparty("12345678Z", "Cliente")
///         .amounts(dec!(1000), dec!(21), dec!(210))
///         .build(),
/// ];
///
/// let q1 = aggregate(&records, 2025, Some(Trimestre::T1));
/// assert_eq!(q1.modelo_303.devengado, dec!(210));
/// assert!(q1.modelo_390.is_none());
///
/// let year = aggregate(&records, 2025, None);
/// assert_eq!(year.modelo_303.devengado, dec!(210));
/// assert!(year.modelo_390.is_some());
/// ```
pub fn aggregate(
    records: &[FiscalRecord],
    year: i32,
    trimestre: Option<Trimestre>,
) -> FiscalSummary {
    match trimestre {
        Some(t) => FiscalSummary {
            year,
            periodo: Periodo::Trimestral(t),
            modelo_303: modelo_303(records, year, t),
            modelo_130: modelo_130(records, year, t),
            modelo_111: modelo_111(records, year, t),
            modelo_390: None,
            modelo_347: None,
            modelo_190: None,
        },
        None => FiscalSummary {
            year,
            periodo: Periodo::Anual,
            modelo_303: modelo_303_anual(records, year),
            modelo_130: modelo_130_anual(records, year),
            modelo_111: modelo_111_anual(records, year),
            modelo_390: Some(modelo_390(records, year)),
            modelo_347: Some(modelo_347(records, year)),
            modelo_190: Some(modelo_190(records, year)),
        },
    }
}

/// Name shown for a counterparty group: the most recent record's name, with
/// the document number as a deterministic tie-break.
pub(crate) fn latest_name(group: &[&FiscalRecord]) -> String {
    group
        .iter()
        .max_by(|a, b| {
            (a.issue_date, a.document_number.as_str())
                .cmp(&(b.issue_date, b.document_number.as_str()))
        })
        .map(|r| r.counterparty.name.clone())
        .unwrap_or_default()
}
