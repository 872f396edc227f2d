//! # librofiscal
//!
//! Fiscal ledger computation engine for a Spanish sole-practitioner
//! professional (autónomo): NIF/NIE/CIF validation, collision-free document
//! numbering, and aggregation of the invoice register into the statutory
//! Modelo 303, 390, 130, 111, 347 and 190 summaries.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The engine is a pure library: every component is a side-effect-free
//! function over an immutable snapshot of [`core::FiscalRecord`]s, so it can
//! be called on every keystroke without reserving counters or holding locks.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use librofiscal::core::*;
//! use rust_decimal_macros::dec;
//!
//! let existing = vec![
//!     FiscalRecordBuilder::new(RecordKind::Income, "A-25-1", NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
//!         .counterparty("B12345674", "Cliente SL")
//!         .amounts(dec!(1000), dec!(21), dec!(210))
//!         .withholding(dec!(15), dec!(150))
//!         .build(),
//! ];
//!
//! assert_eq!(validate_tax_id("B12345674"), TaxIdValidation::Valid(TaxIdKind::Cif));
//! assert_eq!(next_document_number(&existing, RecordKind::Income, 2025), "A-25-2");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, NIF validation, numbering, integrity guard |
//! | `modelos` | Modelo 303/390/130/111/347/190 aggregation |
//! | `store` | Record store trait + in-memory implementation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "modelos")]
pub mod modelos;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
