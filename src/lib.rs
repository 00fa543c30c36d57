//! cashbook - single-user cash book
//!
//! Records cash inflows and outflows in an ordered ledger, keeps it in a
//! local JSON file, and reports the running balance.
//!
//! # Architecture
//!
//! - `models`: `Money`, `TransactionKind` and `Transaction`
//! - `storage`: atomic JSON file I/O and the ledger `Store`
//! - `services`: the `Ledger` (append, remove, balance, partitioned views)
//! - `config`: path resolution and user settings
//! - `display`: terminal formatting
//! - `cli`: command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use cashbook::models::{Money, TransactionKind};
//! use cashbook::services::Ledger;
//! use cashbook::storage::Store;
//!
//! let mut ledger = Ledger::open(Store::new("cashbook.json"));
//! ledger.append(TransactionKind::Inflow, Money::from_cents(10000), "salary")?;
//! ledger.append(TransactionKind::Outflow, Money::from_cents(3000), "lunch")?;
//! assert_eq!(ledger.balance(), Money::from_cents(7000));
//! # Ok::<(), cashbook::CashbookError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CashbookError, CashbookResult};
