use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for constructing fiscal records.
///
/// Construction is infallible: integrity rules need the existing record set,
/// so checking happens in [`check_before_save`](crate::core::check_before_save),
/// not here.
///
/// ```
/// use chrono::NaiveDate;
/// use librofiscal::core::*;
/// use rust_decimal_macros::dec;
///
/// let gasto = FiscalRecordBuilder::new(RecordKind::Expense, "R-25-3", NaiveDate::from_ymd_opt(2025, 2, 4).unwrap())
///     .counterparty("B12345674", "Suministros SL")
///     .amounts(dec!(100), dec!(21), dec!(21))
///     .total(dec!(121))
///     .deductible(true)
///     .build();
///
/// assert_eq!(gasto.total_amount, dec!(121));
/// ```
pub struct FiscalRecordBuilder {
    id: String,
    kind: RecordKind,
    document_number: String,
    issue_date: NaiveDate,
    registration_date: Option<NaiveDate>,
    counterparty: Counterparty,
    tax_base: Decimal,
    vat_rate: Decimal,
    vat_amount: Decimal,
    withholding_rate: Decimal,
    withholding_amount: Decimal,
    total_amount: Option<Decimal>,
    deductible: bool,
    income_category: Option<String>,
    expense_irpf_category: Option<String>,
    expense_vat_category: Option<String>,
}

impl FiscalRecordBuilder {
    pub fn new(kind: RecordKind, document_number: impl Into<String>, issue_date: NaiveDate) -> Self {
        let document_number = document_number.into();
        Self {
            // Default id derived from the unique (kind, number) pair;
            // callers with their own id scheme override via `id()`.
            id: format!("{}:{document_number}", kind.series_prefix()),
            kind,
            document_number,
            issue_date,
            registration_date: None,
            counterparty: Counterparty::new("", ""),
            tax_base: Decimal::ZERO,
            vat_rate: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            withholding_rate: Decimal::ZERO,
            withholding_amount: Decimal::ZERO,
            total_amount: None,
            deductible: kind == RecordKind::Expense,
            income_category: None,
            expense_irpf_category: None,
            expense_vat_category: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn counterparty(mut self, tax_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.counterparty = Counterparty::new(tax_id, name);
        self
    }

    pub fn counterparty_address(mut self, address: impl Into<String>) -> Self {
        self.counterparty.address = Some(address.into());
        self
    }

    /// Set the taxable base plus the VAT rate and stored VAT amount.
    ///
    /// The amount is stored as given — it is not derived from the rate.
    pub fn amounts(mut self, tax_base: Decimal, vat_rate: Decimal, vat_amount: Decimal) -> Self {
        self.tax_base = tax_base;
        self.vat_rate = vat_rate;
        self.vat_amount = vat_amount;
        self
    }

    /// Set the IRPF retention rate and stored retention amount.
    pub fn withholding(mut self, rate: Decimal, amount: Decimal) -> Self {
        self.withholding_rate = rate;
        self.withholding_amount = amount;
        self
    }

    /// Set the stored document total. Defaults to
    /// `tax_base + vat_amount - withholding_amount` when not supplied.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total_amount = Some(total);
        self
    }

    pub fn registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    pub fn deductible(mut self, deductible: bool) -> Self {
        self.deductible = deductible;
        self
    }

    pub fn income_category(mut self, category: impl Into<String>) -> Self {
        self.income_category = Some(category.into());
        self
    }

    pub fn expense_categories(
        mut self,
        irpf: impl Into<String>,
        vat: impl Into<String>,
    ) -> Self {
        self.expense_irpf_category = Some(irpf.into());
        self.expense_vat_category = Some(vat.into());
        self
    }

    pub fn build(self) -> FiscalRecord {
        let total_amount = self
            .total_amount
            .unwrap_or(self.tax_base + self.vat_amount - self.withholding_amount);
        FiscalRecord {
            id: self.id,
            kind: self.kind,
            document_number: self.document_number,
            issue_date: self.issue_date,
            registration_date: self.registration_date,
            counterparty: self.counterparty,
            tax_base: self.tax_base,
            vat_rate: self.vat_rate,
            vat_amount: self.vat_amount,
            withholding_rate: self.withholding_rate,
            withholding_amount: self.withholding_amount,
            total_amount,
            deductible: self.deductible,
            income_category: self.income_category,
            expense_irpf_category: self.expense_irpf_category,
            expense_vat_category: self.expense_vat_category,
        }
    }
}
