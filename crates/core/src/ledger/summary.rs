//! Per-ledger derived view.

use dheeto_shared::types::LedgerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::{CashTotals, compute_cash_totals};
use super::error::LedgerError;
use super::items::{WeightTotals, compute_weight_totals, count_unsettled_items, validate_items};
use super::types::Ledger;

/// Everything displayed about a single ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The summarized ledger.
    pub ledger_id: LedgerId,
    /// Net balance (received - gave).
    pub balance: Decimal,
    /// Sum of "gave" amounts.
    pub total_gave: Decimal,
    /// Sum of "received" amounts.
    pub total_received: Decimal,
    /// The ledger's stored, manually set flag.
    pub is_settled: bool,
    /// Gold weight in tola.
    pub total_gold_weight: Decimal,
    /// Silver weight in tola.
    pub total_silver_weight: Decimal,
    /// Number of items not yet settled.
    pub unsettled_item_count: usize,
}

impl LedgerSummary {
    /// Cash totals of the ledger.
    #[must_use]
    pub fn cash(&self) -> CashTotals {
        CashTotals {
            total_gave: self.total_gave,
            total_received: self.total_received,
            balance: self.balance,
        }
    }

    /// Weight totals of the ledger.
    #[must_use]
    pub fn weights(&self) -> WeightTotals {
        WeightTotals {
            total_gold_weight: self.total_gold_weight,
            total_silver_weight: self.total_silver_weight,
        }
    }
}

/// Derives the summary of a ledger.
///
/// Read-only: `is_settled` is copied from the ledger as stored, never
/// recomputed from the balance or the items.
///
/// # Errors
///
/// Returns `LedgerError` if any item or transaction fails validation.
pub fn summarize_ledger(ledger: &Ledger) -> Result<LedgerSummary, LedgerError> {
    validate_items(&ledger.items)?;
    let cash = compute_cash_totals(&ledger.transactions)?;
    let weights = compute_weight_totals(&ledger.items)?;

    Ok(LedgerSummary {
        ledger_id: ledger.id.clone(),
        balance: cash.balance,
        total_gave: cash.total_gave,
        total_received: cash.total_received,
        is_settled: ledger.is_settled,
        total_gold_weight: weights.total_gold_weight,
        total_silver_weight: weights.total_silver_weight,
        unsettled_item_count: count_unsettled_items(&ledger.items),
    })
}
