use serde::{Deserialize, Serialize};

use super::error::Issue;
use super::nif::{TaxIdValidation, validate_tax_id};
use super::types::{FiscalRecord, RecordKind};

/// Outcome of [`check_before_save`]: every issue found, classified.
///
/// Blocking issues must prevent the save; advisory issues allow it after
/// explicit user confirmation and stay flagged until corrected. The guard
/// itself never mutates anything and never decides; it only classifies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveCheck {
    pub blocking: Vec<Issue>,
    pub advisory: Vec<Issue>,
}

impl SaveCheck {
    /// No blocking issues: the caller may commit the write.
    pub fn can_save(&self) -> bool {
        self.blocking.is_empty()
    }

    /// No issues at all.
    pub fn is_clean(&self) -> bool {
        self.blocking.is_empty() && self.advisory.is_empty()
    }
}

/// Check a draft record against the invariants that must hold before a
/// write is accepted. Returns all failing fields, not just the first.
///
/// Rules:
/// 1. `(kind, document_number)` must be unique across the whole store —
///    checked against `existing` unless `is_edit` (replace-by-id keeps the
///    number's slot).
/// 2. Counterparty identifier per [`validate_tax_id`] policy: blocking for
///    income records, advisory for expense records so foreign and
///    intracommunity VAT numbers stay saveable.
/// 3. Required fields: `counterparty.name`, `counterparty.tax_id`,
///    `document_number`. (`issue_date` is guaranteed by the type system.)
pub fn check_before_save(
    draft: &FiscalRecord,
    existing: &[FiscalRecord],
    is_edit: bool,
) -> SaveCheck {
    let mut check = SaveCheck::default();

    if draft.document_number.trim().is_empty() {
        check.blocking.push(Issue::new(
            "document_number",
            "document number must not be empty",
        ));
    }
    if draft.counterparty.name.trim().is_empty() {
        check.blocking.push(Issue::new(
            "counterparty.name",
            "counterparty name must not be empty",
        ));
    }

    let tax_id = draft.counterparty.tax_id.trim();
    if tax_id.is_empty() {
        check.blocking.push(Issue::new(
            "counterparty.tax_id",
            "counterparty tax identifier must not be empty",
        ));
    } else {
        let issue = match validate_tax_id(tax_id) {
            TaxIdValidation::Valid(_) => None,
            TaxIdValidation::InvalidChecksum { expected, .. } => Some(Issue::new(
                "counterparty.tax_id",
                format!("'{tax_id}' has a wrong control letter, expected '{expected}'"),
            )),
            TaxIdValidation::UnrecognizedFormat => Some(Issue::new(
                "counterparty.tax_id",
                format!("'{tax_id}' is not a recognized NIF, NIE or CIF"),
            )),
        };
        if let Some(issue) = issue {
            match draft.kind {
                RecordKind::Income => check.blocking.push(issue),
                RecordKind::Expense => check.advisory.push(issue),
            }
        }
    }

    if !is_edit
        && existing
            .iter()
            .any(|r| r.kind == draft.kind && r.document_number == draft.document_number)
    {
        check.blocking.push(Issue::new(
            "document_number",
            format!(
                "document number '{}' already exists for this record kind",
                draft.document_number
            ),
        ));
    }

    check
}
