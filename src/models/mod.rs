//! Core data models for cashbook
//!
//! Amounts, transaction kinds and the transaction record itself.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{checked_totals, Transaction, TransactionKind};
