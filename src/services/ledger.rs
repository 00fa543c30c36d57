//! Ledger service
//!
//! Holds the authoritative, insertion-ordered list of transactions, computes
//! the balance, and persists a full snapshot through its [`Store`] after
//! every successful mutation.

use tracing::info;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{checked_totals, Money, Transaction, TransactionKind};
use crate::storage::Store;

/// One row of a partitioned view: the record plus its current position in
/// the ledger. Positions are only valid until the next mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub position: usize,
    pub transaction: Transaction,
}

/// Totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    pub inflows: Money,
    pub outflows: Money,
    pub balance: Money,
    pub count: usize,
}

impl LedgerSummary {
    pub fn total(&self, kind: TransactionKind) -> Money {
        match kind {
            TransactionKind::Inflow => self.inflows,
            TransactionKind::Outflow => self.outflows,
        }
    }
}

/// In-memory ledger backed by a flat-file store
#[derive(Debug)]
pub struct Ledger {
    store: Store,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Hydrate a ledger from its store
    pub fn open(store: Store) -> Self {
        let transactions = store.load();
        Self {
            store,
            transactions,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a new transaction and persist
    ///
    /// A non-positive or oversized amount, or one that would overflow the
    /// running totals, is rejected before anything changes. If the save
    /// fails the record stays appended in memory and the error is returned.
    pub fn append(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> CashbookResult<()> {
        let txn = Transaction::new(kind, amount, description)?;
        if checked_totals(self.transactions.iter().chain(std::iter::once(&txn))).is_none() {
            return Err(CashbookError::Validation(format!(
                "Adding {} would overflow the ledger totals",
                txn.amount
            )));
        }
        info!(%kind, amount = %txn.amount, "appending transaction");
        self.transactions.push(txn);
        self.store.save(&self.transactions)
    }

    /// Parse raw user input, then append
    pub fn record(&mut self, kind: &str, amount: &str, description: &str) -> CashbookResult<()> {
        let kind: TransactionKind = kind.parse()?;
        let amount = Money::parse(amount).map_err(|e| {
            CashbookError::Validation(format!(
                "Invalid amount: {}. Use a format like '100' or '30.50'",
                e
            ))
        })?;
        self.append(kind, amount, description)
    }

    /// Remove the record at `position` and persist
    ///
    /// Later records shift down by one. Returns a copy of the removed record.
    pub fn remove_at(&mut self, position: usize) -> CashbookResult<Transaction> {
        if position >= self.transactions.len() {
            return Err(CashbookError::IndexOutOfRange {
                position,
                len: self.transactions.len(),
            });
        }

        let removed = self.transactions.remove(position);
        info!(position, kind = %removed.kind, amount = %removed.amount, "removed transaction");
        self.store.save(&self.transactions)?;
        Ok(removed)
    }

    /// Sum of inflows minus sum of outflows
    ///
    /// Both totals always fit in an i64 (enforced on append and load), so the
    /// running sum cannot overflow.
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn summary(&self) -> LedgerSummary {
        let total = |kind: TransactionKind| {
            self.transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum::<Money>()
        };
        let inflows = total(TransactionKind::Inflow);
        let outflows = total(TransactionKind::Outflow);

        LedgerSummary {
            inflows,
            outflows,
            balance: inflows - outflows,
            count: self.transactions.len(),
        }
    }

    /// The records of one kind, in insertion order, with their current positions
    pub fn view(&self, kind: TransactionKind) -> Vec<ViewRow> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind == kind)
            .map(|(position, t)| ViewRow {
                position,
                transaction: t.clone(),
            })
            .collect()
    }

    /// Map a zero-based row of the `kind` view to its current ledger position
    pub fn resolve_row(&self, kind: TransactionKind, row: usize) -> CashbookResult<usize> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind == kind)
            .nth(row)
            .map(|(position, _)| position)
            .ok_or_else(|| CashbookError::transaction_not_found(format!("{} row {}", kind, row + 1)))
    }

    /// Remove the record shown at `row` of the `kind` view
    pub fn remove_row(&mut self, kind: TransactionKind, row: usize) -> CashbookResult<Transaction> {
        let position = self.resolve_row(kind, row)?;
        self.remove_at(position)
    }
}
