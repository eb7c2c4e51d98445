//! Ledger cash balance calculations.
//!
//! `compute_cash_totals` is the one place gave/received sums are derived.
//! Every other view of a ledger's cash position goes through it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::types::{Direction, Transaction};

/// Gave/received totals and the resulting balance of a ledger.
///
/// `balance = total_received - total_gave`. Positive means the ledger owner
/// is owed money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTotals {
    /// Sum of all "gave" amounts.
    pub total_gave: Decimal,
    /// Sum of all "received" amounts.
    pub total_received: Decimal,
    /// Net balance.
    pub balance: Decimal,
}

impl CashTotals {
    /// Adds a movement in the given direction.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if a total leaves the decimal range.
    pub fn add(&mut self, direction: Direction, amount: Decimal) -> Result<(), LedgerError> {
        match direction {
            Direction::Gave => {
                self.total_gave = checked_sum(self.total_gave, amount, "totalGave")?;
            }
            Direction::Received => {
                self.total_received = checked_sum(self.total_received, amount, "totalReceived")?;
            }
        }
        self.balance = net_balance(self.total_received, self.total_gave)?;
        Ok(())
    }

    /// Combines two sets of totals.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if a total leaves the decimal range.
    pub fn combine(self, other: Self) -> Result<Self, LedgerError> {
        let total_gave = checked_sum(self.total_gave, other.total_gave, "totalGave")?;
        let total_received =
            checked_sum(self.total_received, other.total_received, "totalReceived")?;
        Ok(Self {
            total_gave,
            total_received,
            balance: net_balance(total_received, total_gave)?,
        })
    }
}

pub(crate) fn checked_sum(
    a: Decimal,
    b: Decimal,
    total: &'static str,
) -> Result<Decimal, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::Overflow(total))
}

fn net_balance(received: Decimal, gave: Decimal) -> Result<Decimal, LedgerError> {
    received
        .checked_sub(gave)
        .ok_or(LedgerError::Overflow("balance"))
}

/// Computes gave/received totals and the balance for a list of transactions.
///
/// The order of `transactions` does not affect the result.
///
/// # Errors
///
/// Returns `LedgerError::NegativeAmount` if any amount is negative, or
/// `LedgerError::Overflow` if a total leaves the decimal range.
pub fn compute_cash_totals(transactions: &[Transaction]) -> Result<CashTotals, LedgerError> {
    let mut totals = CashTotals::default();

    for transaction in transactions {
        if transaction.amount < Decimal::ZERO {
            tracing::debug!(transaction_id = %transaction.id, "rejecting negative amount");
            return Err(LedgerError::NegativeAmount);
        }
        totals.add(transaction.direction, transaction.amount)?;
    }

    Ok(totals)
}

/// Computes the net balance of a list of transactions.
///
/// Zero for an empty list.
///
/// # Errors
///
/// Returns `LedgerError::NegativeAmount` if any amount is negative.
pub fn compute_ledger_balance(transactions: &[Transaction]) -> Result<Decimal, LedgerError> {
    compute_cash_totals(transactions).map(|totals| totals.balance)
}
