use thiserror::Error;

/// Errors that can occur at the ledger's write boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibroError {
    /// A write was refused because blocking integrity issues remain.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A replace or delete referenced an id not present in the store.
    #[error("unknown record id: {0}")]
    UnknownRecord(String),

    /// Document number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),
}

/// A single integrity or validation issue with field path and message.
///
/// Issues are data, not errors: the guard returns every failing field and
/// the caller decides whether to block the save or prompt for an override.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    /// Dot-separated path to the offending field (e.g. "counterparty.tax_id").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Issue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
