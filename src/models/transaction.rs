//! Transaction model
//!
//! One recorded cash movement: a kind (inflow or outflow), a strictly
//! positive amount and a free-text description.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::CashbookError;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    #[serde(alias = "entrada")]
    Inflow,
    /// Money going out
    #[serde(alias = "saida", alias = "saída")]
    Outflow,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Inflow, TransactionKind::Outflow];

    /// Heading used for this kind's view
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Inflow => "Inflows",
            Self::Outflow => "Outflows",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "inflow"),
            Self::Outflow => write!(f, "outflow"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = CashbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "in" | "entrada" => Ok(Self::Inflow),
            "outflow" | "out" | "saida" | "saída" => Ok(Self::Outflow),
            _ => Err(CashbookError::Validation(format!(
                "Invalid transaction kind: '{}'. Use inflow or outflow",
                s
            ))),
        }
    }
}

/// A single cash movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,

    /// Always strictly positive; the kind carries the sign
    #[serde(alias = "valor")]
    pub amount: Money,

    #[serde(default, alias = "descricao")]
    pub description: String,
}

impl Transaction {
    /// Create a validated transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<Self, CashbookError> {
        let txn = Self {
            kind,
            amount,
            description: description.into(),
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), CashbookError> {
        if !self.amount.is_positive() {
            return Err(CashbookError::Validation(format!(
                "Amount must be greater than zero, got {}",
                self.amount
            )));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(CashbookError::Validation(format!(
                "Amount must not exceed {}, got {}",
                Money::MAX_AMOUNT,
                self.amount
            )));
        }
        Ok(())
    }

    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionKind::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionKind::Outflow
    }

    /// Contribution to the balance: positive for inflows, negative for outflows
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Inflow => self.amount,
            TransactionKind::Outflow => -self.amount,
        }
    }
}

/// Inflow and outflow totals, or `None` if either would overflow
pub fn checked_totals<'a, I>(transactions: I) -> Option<(Money, Money)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .try_fold((Money::zero(), Money::zero()), |(inflows, outflows), t| {
            match t.kind {
                TransactionKind::Inflow => Some((inflows.checked_add(t.amount)?, outflows)),
                TransactionKind::Outflow => Some((inflows, outflows.checked_add(t.amount)?)),
            }
        })
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
