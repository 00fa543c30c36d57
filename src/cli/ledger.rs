//! Ledger CLI commands
//!
//! Implements the commands that record, list and remove transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balance, format_ledger, format_view};
use crate::error::{CashbookError, CashbookResult};
use crate::models::TransactionKind;
use crate::services::Ledger;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Record a transaction
    Add {
        /// inflow or outflow
        kind: String,
        /// Amount (e.g., "100", "30.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Free-text description
        description: Vec<String>,
    },
    /// Record an inflow
    #[command(name = "in", alias = "inflow")]
    In {
        #[arg(allow_negative_numbers = true)]
        amount: String,
        description: Vec<String>,
    },
    /// Record an outflow
    #[command(name = "out", alias = "outflow")]
    Out {
        #[arg(allow_negative_numbers = true)]
        amount: String,
        description: Vec<String>,
    },
    /// Show inflows, outflows and the balance
    #[command(alias = "ls")]
    List {
        /// Only show one view (inflow or outflow)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Remove a transaction by its row number in the list
    #[command(alias = "rm")]
    Remove {
        /// The view the row belongs to (inflow or outflow)
        kind: String,
        /// Row number as shown by `list`
        row: usize,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the current balance
    Balance,
}

/// Handle a ledger command
///
/// `confirm` is asked before a removal unless `--yes` was given or
/// confirmations are disabled in the settings.
pub fn handle_ledger_command<F>(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: LedgerCommands,
    mut confirm: F,
) -> CashbookResult<()>
where
    F: FnMut(&str) -> CashbookResult<bool>,
{
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LedgerCommands::Add {
            kind,
            amount,
            description,
        } => {
            ledger.record(&kind, &amount, &description.join(" "))?;
            print_recorded(ledger, symbol);
        }

        LedgerCommands::In {
            amount,
            description,
        } => {
            ledger.record("inflow", &amount, &description.join(" "))?;
            print_recorded(ledger, symbol);
        }

        LedgerCommands::Out {
            amount,
            description,
        } => {
            ledger.record("outflow", &amount, &description.join(" "))?;
            print_recorded(ledger, symbol);
        }

        LedgerCommands::List { kind } => match kind {
            Some(kind) => {
                let kind: TransactionKind = kind.parse()?;
                let summary = ledger.summary();
                print!("{}", format_view(kind, &ledger.view(kind), summary.total(kind)));
                println!();
                println!("{}", format_balance(summary.balance, symbol));
            }
            None => print!("{}", format_ledger(ledger, symbol)),
        },

        LedgerCommands::Remove { kind, row, yes } => {
            let kind: TransactionKind = kind.parse()?;
            let index = row
                .checked_sub(1)
                .ok_or_else(|| CashbookError::transaction_not_found(format!("{} row 0", kind)))?;

            // Resolve now; positions shift with every mutation
            let position = ledger.resolve_row(kind, index)?;
            let txn = &ledger.transactions()[position];

            if settings.confirm_removals && !yes && !confirm(&format!("Remove {}?", txn))? {
                println!("Nothing removed.");
                return Ok(());
            }

            let removed = ledger.remove_at(position)?;
            println!("Removed {}", removed);
            println!("{}", format_balance(ledger.balance(), symbol));
        }

        LedgerCommands::Balance => {
            println!("{}", format_balance(ledger.balance(), symbol));
        }
    }

    Ok(())
}

fn print_recorded(ledger: &Ledger, symbol: &str) {
    if let Some(txn) = ledger.transactions().last() {
        println!("Recorded {}", txn);
    }
    println!("{}", format_balance(ledger.balance(), symbol));
}
