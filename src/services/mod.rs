//! Service layer for cashbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields and persistence after mutations.

pub mod ledger;

pub use ledger::{Ledger, LedgerSummary, ViewRow};
