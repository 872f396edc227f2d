use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single entry in the fiscal ledger: an issued invoice (income) or a
/// received invoice/ticket (expense).
///
/// The engine treats records as immutable snapshots: editing is whole-record
/// replacement by `id`, never a field patch. Stored derived amounts
/// (`vat_amount`, `withholding_amount`, `total_amount`) are trusted as given
/// and never recomputed during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalRecord {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Income (issued invoice) or expense (received invoice).
    pub kind: RecordKind,
    /// Document number, unique per `kind` across the whole store.
    /// Follows the `{A|R}-{yy}-{n}` series pattern by convention.
    pub document_number: String,
    /// Authoritative date for year/quarter partitioning.
    pub issue_date: NaiveDate,
    /// Accounting entry date; expense-only, may lag `issue_date`.
    pub registration_date: Option<NaiveDate>,
    /// The other party: client for income, supplier for expense.
    pub counterparty: Counterparty,
    /// Taxable base.
    pub tax_base: Decimal,
    /// VAT (IVA) percentage.
    pub vat_rate: Decimal,
    /// VAT amount as stored. May have been supplied directly and need not
    /// equal `tax_base * vat_rate / 100`.
    pub vat_amount: Decimal,
    /// IRPF retention percentage.
    pub withholding_rate: Decimal,
    /// IRPF retention amount as stored.
    pub withholding_amount: Decimal,
    /// Stored document total.
    pub total_amount: Decimal,
    /// Whether an expense counts toward input VAT and IRPF deductions.
    /// Income records are implicitly always taxable output.
    pub deductible: bool,
    /// Income classification, free-form (the form layer constrains choices).
    pub income_category: Option<String>,
    /// Expense IRPF classification, free-form.
    pub expense_irpf_category: Option<String>,
    /// Expense VAT classification, free-form.
    pub expense_vat_category: Option<String>,
}

/// The counterparty of a record, never the professional's own identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterparty {
    /// Spanish NIF/NIE/CIF, or a foreign/EU VAT id on the expense side.
    pub tax_id: String,
    /// Legal name.
    pub name: String,
    /// Postal address, free-form.
    pub address: Option<String>,
}

impl Counterparty {
    pub fn new(tax_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            address: None,
        }
    }
}

/// Record kind. Never changes after creation; switching sides means
/// creating a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Issued invoice (ingreso).
    Income,
    /// Received invoice or ticket (gasto).
    Expense,
}

impl RecordKind {
    /// Numbering series prefix: `A` for income, `R` for expense.
    pub fn series_prefix(&self) -> char {
        match self {
            Self::Income => 'A',
            Self::Expense => 'R',
        }
    }

    /// Parse from a series prefix letter.
    pub fn from_series_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'A' => Some(Self::Income),
            'R' => Some(Self::Expense),
            _ => None,
        }
    }
}
