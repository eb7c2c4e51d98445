//! Roll-up of all ledgers belonging to one person.

use dheeto_shared::types::PersonId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::CashTotals;
use super::error::LedgerError;
use super::items::WeightTotals;
use super::summary::summarize_ledger;
use super::types::Ledger;

/// Aggregate position of a person across their ledgers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    /// Sum of ledger balances.
    pub total_balance: Decimal,
    /// Gold weight in tola across all ledgers.
    pub total_gold: Decimal,
    /// Silver weight in tola across all ledgers.
    pub total_silver: Decimal,
    /// Ledgers whose stored flag is not settled.
    pub unsettled_ledger_count: usize,
    /// Number of ledgers aggregated.
    pub ledger_count: usize,
}

/// Aggregates a person's ledgers.
///
/// The caller must pass the complete set of ledgers for one person. Zero
/// ledgers yield an all-zero summary, and ordering does not matter.
///
/// # Errors
///
/// Returns `LedgerError` if any ledger fails validation or a total
/// overflows.
pub fn aggregate_person(ledgers: &[Ledger]) -> Result<PersonSummary, LedgerError> {
    let mut cash = CashTotals::default();
    let mut weights = WeightTotals::default();
    let mut unsettled_ledger_count = 0;

    for ledger in ledgers {
        let summary = summarize_ledger(ledger)?;
        cash = cash.combine(summary.cash())?;
        weights = weights.combine(summary.weights())?;
        unsettled_ledger_count += usize::from(!summary.is_settled);
    }

    Ok(PersonSummary {
        total_balance: cash.balance,
        total_gold: weights.total_gold_weight,
        total_silver: weights.total_silver_weight,
        unsettled_ledger_count,
        ledger_count: ledgers.len(),
    })
}

/// Aggregates a person's ledgers after checking they all belong to `person_id`.
///
/// # Errors
///
/// Returns `LedgerError::ForeignLedger` for a ledger owned by someone else,
/// or any validation error from [`aggregate_person`].
pub fn aggregate_person_checked(
    person_id: &PersonId,
    ledgers: &[Ledger],
) -> Result<PersonSummary, LedgerError> {
    if let Some(foreign) = ledgers.iter().find(|ledger| &ledger.person_id != person_id) {
        return Err(LedgerError::ForeignLedger {
            ledger_id: foreign.id.clone(),
            expected: person_id.clone(),
        });
    }
    aggregate_person(ledgers)
}
