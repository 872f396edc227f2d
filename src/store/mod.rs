//! The injected record-store boundary.
//!
//! The engine never touches global state: callers hand it snapshots obtained
//! from a [`RecordStore`]. Operations are synchronous and atomic from the
//! engine's perspective, and the store assumes single-writer access —
//! multi-session deployments need a compare-and-swap or transactional write
//! at this boundary, outside the engine's responsibility.

use crate::core::{FiscalRecord, LibroError, check_before_save};

/// Store interface the engine is consumed against.
pub trait RecordStore {
    /// Full snapshot of the ledger.
    fn list_all(&self) -> Vec<FiscalRecord>;

    /// Append a new record. Refuses drafts with blocking integrity issues.
    fn insert(&mut self, record: FiscalRecord) -> Result<(), LibroError>;

    /// Replace a record wholesale: edit is replace-by-id, never a field
    /// patch. The stored record keeps the addressed id, and its kind is
    /// immutable.
    fn replace(&mut self, id: &str, record: FiscalRecord) -> Result<(), LibroError>;

    /// Remove a single record.
    fn delete(&mut self, id: &str) -> Result<(), LibroError>;

    /// Remove several records; unknown ids are skipped. Returns the number
    /// actually removed.
    fn delete_many(&mut self, ids: &[String]) -> usize;
}

/// Vec-backed reference store for tests, demos and embedding.
///
/// Writes run the integrity guard first: blocking issues refuse the write
/// with [`LibroError::Validation`]; advisory issues never block here — the
/// caller surfaced and confirmed them before committing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<FiscalRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl RecordStore for MemoryStore {
    fn list_all(&self) -> Vec<FiscalRecord> {
        self.records.clone()
    }

    fn insert(&mut self, record: FiscalRecord) -> Result<(), LibroError> {
        let check = check_before_save(&record, &self.records, false);
        if !check.can_save() {
            return Err(LibroError::Validation(join_issues(&check.blocking)));
        }
        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, id: &str, mut record: FiscalRecord) -> Result<(), LibroError> {
        let Some(pos) = self.position(id) else {
            return Err(LibroError::UnknownRecord(id.into()));
        };
        if self.records[pos].kind != record.kind {
            return Err(LibroError::Validation(
                "record kind is immutable, create a new record instead".into(),
            ));
        }
        let check = check_before_save(&record, &self.records, true);
        if !check.can_save() {
            return Err(LibroError::Validation(join_issues(&check.blocking)));
        }
        record.id = id.into();
        self.records[pos] = record;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), LibroError> {
        let Some(pos) = self.position(id) else {
            return Err(LibroError::UnknownRecord(id.into()));
        };
        self.records.remove(pos);
        Ok(())
    }

    fn delete_many(&mut self, ids: &[String]) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        before - self.records.len()
    }
}

fn join_issues(issues: &[crate::core::Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FiscalRecordBuilder, RecordKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn income(id: &str, number: &str) -> FiscalRecord {
        FiscalRecordBuilder::new(RecordKind::Income, number, date())
            .id(id)
            .counterparty("12345678Z", "Cliente SL")
            .amounts(dec!(1000), dec!(21), dec!(210))
            .build()
    }

    #[test]
    fn insert_then_list() {
        let mut store = MemoryStore::new();
        store.insert(income("r1", "A-25-1")).unwrap();
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn duplicate_number_refused() {
        let mut store = MemoryStore::new();
        store.insert(income("r1", "A-25-1")).unwrap();
        let err = store.insert(income("r2", "A-25-1")).unwrap_err();
        assert!(matches!(err, LibroError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn advisory_issues_do_not_block_expense_writes() {
        let mut store = MemoryStore::new();
        let foreign = FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date())
            .id("g1")
            .counterparty("DE123456789", "Lieferant GmbH")
            .amounts(dec!(100), dec!(19), dec!(19))
            .build();
        store.insert(foreign).unwrap();
    }

    #[test]
    fn replace_keeps_id_and_kind() {
        let mut store = MemoryStore::new();
        store.insert(income("r1", "A-25-1")).unwrap();

        let edited = income("whatever", "A-25-1");
        store.replace("r1", edited).unwrap();
        assert_eq!(store.list_all()[0].id, "r1");

        let expense = FiscalRecordBuilder::new(RecordKind::Expense, "R-25-1", date())
            .counterparty("B12345674", "Proveedor SL")
            .build();
        assert!(matches!(
            store.replace("r1", expense),
            Err(LibroError::Validation(_))
        ));
    }

    #[test]
    fn unknown_ids_error() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.replace("missing", income("x", "A-25-1")),
            Err(LibroError::UnknownRecord(_))
        ));
        assert!(matches!(
            store.delete("missing"),
            Err(LibroError::UnknownRecord(_))
        ));
    }

    #[test]
    fn delete_many_skips_unknown() {
        let mut store = MemoryStore::new();
        store.insert(income("r1", "A-25-1")).unwrap();
        store.insert(income("r2", "A-25-2")).unwrap();
        let removed = store.delete_many(&["r1".into(), "missing".into()]);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
    }
}
