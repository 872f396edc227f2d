//! Core record types, tax-identifier validation, numbering, and the
//! integrity guard.
//!
//! Everything here is synchronous and pure: the functions take a snapshot of
//! the ledger and return data. Persistence lives behind the `store` feature.

mod builder;
mod error;
mod guard;
mod nif;
mod numbering;
mod types;

pub use builder::*;
pub use error::*;
pub use guard::*;
pub use nif::*;
pub use numbering::*;
pub use types::*;
