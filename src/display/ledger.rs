//! Ledger display formatting
//!
//! Renders the inflow and outflow views and the balance line for terminal
//! output. Rows are numbered from 1; that number is what `remove` expects.

use crate::models::{Money, TransactionKind};
use crate::services::{Ledger, ViewRow};

const DESCRIPTION_WIDTH: usize = 32;

/// Format one partitioned view as a numbered table, closed by `total`
pub fn format_view(kind: TransactionKind, rows: &[ViewRow], total: Money) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", kind.plural()));

    if rows.is_empty() {
        output.push_str(&format!("  No {} recorded.\n", kind.plural().to_lowercase()));
        return output;
    }

    output.push_str(&format!(
        "{:>4}  {:>12}  {}\n",
        "#", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(20 + DESCRIPTION_WIDTH));
    output.push('\n');

    for (row, view_row) in rows.iter().enumerate() {
        let txn = &view_row.transaction;
        output.push_str(&format!(
            "{:>4}  {:>12}  {}\n",
            row + 1,
            txn.amount.to_string(),
            truncate(&txn.description, DESCRIPTION_WIDTH).trim_end()
        ));
    }

    output.push_str(&format!("{:>4}  {:>12}\n", "", total.to_string()));

    output
}

/// Format the balance line, e.g. `Balance: R$ 70.00`
pub fn format_balance(balance: Money, currency_symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(currency_symbol))
}

/// Format both views followed by the balance
pub fn format_ledger(ledger: &Ledger, currency_symbol: &str) -> String {
    let summary = ledger.summary();
    let mut output = String::new();
    for kind in TransactionKind::ALL {
        output.push_str(&format_view(kind, &ledger.view(kind), summary.total(kind)));
        output.push('\n');
    }
    output.push_str(&format_balance(summary.balance, currency_symbol));
    output.push('\n');
    output
}

/// Truncate a string to a maximum number of characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
