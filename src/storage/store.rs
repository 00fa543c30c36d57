//! Ledger file persistence
//!
//! The file holds a bare JSON array of transaction records. Every save
//! rewrites the whole array; loading never fails and falls back to an empty
//! ledger when the file is missing or unusable.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CashbookError, CashbookResult};
use crate::models::{checked_totals, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Flat-file store for the ledger's transaction sequence
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store bound to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted sequence
    ///
    /// A missing, unreadable or malformed file yields an empty sequence. A
    /// single invalid record discards the whole file.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(Some(transactions)) => {
                debug!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded ledger"
                );
                transactions
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no ledger file, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unusable ledger file");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> CashbookResult<Option<Vec<Transaction>>> {
        let Some(transactions) = read_json::<Vec<Transaction>, _>(&self.path)? else {
            return Ok(None);
        };

        for (position, txn) in transactions.iter().enumerate() {
            txn.validate().map_err(|e| {
                CashbookError::Storage(format!("Invalid record at position {}: {}", position, e))
            })?;
        }

        if checked_totals(&transactions).is_none() {
            return Err(CashbookError::Storage(
                "Ledger totals exceed the representable range".into(),
            ));
        }

        Ok(Some(transactions))
    }

    /// Replace the persisted sequence with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> CashbookResult<()> {
        write_json_atomic(&self.path, transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved ledger"
        );
        Ok(())
    }
}
