//! Item weight totals and settlement tracking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::checked_sum;
use super::error::LedgerError;
use super::types::{Item, MetalType};

/// Total weight in tola, split by metal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTotals {
    /// Sum of gold item weights.
    pub total_gold_weight: Decimal,
    /// Sum of silver item weights.
    pub total_silver_weight: Decimal,
}

impl WeightTotals {
    /// Adds an item weight under its metal.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if a total leaves the decimal range.
    pub fn add(&mut self, metal: MetalType, weight: Decimal) -> Result<(), LedgerError> {
        match metal {
            MetalType::Gold => {
                self.total_gold_weight =
                    checked_sum(self.total_gold_weight, weight, "totalGoldWeight")?;
            }
            MetalType::Silver => {
                self.total_silver_weight =
                    checked_sum(self.total_silver_weight, weight, "totalSilverWeight")?;
            }
        }
        Ok(())
    }

    /// Combined weight of all metals.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if the sum leaves the decimal range.
    pub fn total(&self) -> Result<Decimal, LedgerError> {
        checked_sum(self.total_gold_weight, self.total_silver_weight, "totalWeight")
    }

    /// Combines two sets of totals.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if a total leaves the decimal range.
    pub fn combine(self, other: Self) -> Result<Self, LedgerError> {
        Ok(Self {
            total_gold_weight: checked_sum(
                self.total_gold_weight,
                other.total_gold_weight,
                "totalGoldWeight",
            )?,
            total_silver_weight: checked_sum(
                self.total_silver_weight,
                other.total_silver_weight,
                "totalSilverWeight",
            )?,
        })
    }
}

/// Sums item weights by metal type.
///
/// # Errors
///
/// Returns `LedgerError::NegativeWeight` if any weight is negative, or
/// `LedgerError::Overflow` if a total leaves the decimal range.
pub fn compute_weight_totals(items: &[Item]) -> Result<WeightTotals, LedgerError> {
    let mut totals = WeightTotals::default();

    for item in items {
        if item.weight_in_tola < Decimal::ZERO {
            tracing::debug!(item_id = %item.id, "rejecting negative weight");
            return Err(LedgerError::NegativeWeight);
        }
        totals.add(item.metal, item.weight_in_tola)?;
    }

    Ok(totals)
}

/// Returns `item` with its settlement flag and timestamp set together.
///
/// Settling stamps `settled_at` with `now`; unsettling clears it.
#[must_use]
pub fn set_item_settlement(item: Item, settled: bool, now: DateTime<Utc>) -> Item {
    Item {
        is_settled: settled,
        settled_at: settled.then_some(now),
        ..item
    }
}

/// Counts items that are not yet settled.
pub fn count_unsettled_items(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.is_settled).count()
}

/// Validates every item before aggregation.
///
/// Checks settlement pairing, plus non-negative weight and purity.
pub(crate) fn validate_items(items: &[Item]) -> Result<(), LedgerError> {
    for item in items {
        item.check_settlement_pair()?;
        if item.purity < Decimal::ZERO {
            return Err(LedgerError::NegativePurity);
        }
    }
    Ok(())
}
