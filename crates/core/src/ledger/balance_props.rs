//! Property-based tests for cash balance and item weight calculations.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{compute_cash_totals, compute_ledger_balance};
use super::balance::tests::make_transaction;
use super::items::tests::make_item;
use super::items::{compute_weight_totals, set_item_settlement};
use super::types::{Direction, Item, MetalType, Transaction};

/// Strategy to generate a non-negative amount (0.00 to 1,000,000.00).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2))
}

/// Strategy to generate a non-negative weight in tola (three decimals).
fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Gave), Just(Direction::Received)]
}

fn metal_strategy() -> impl Strategy<Value = MetalType> {
    prop_oneof![Just(MetalType::Gold), Just(MetalType::Silver)]
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (direction_strategy(), amount_strategy())
        .prop_map(|(direction, amount)| make_transaction(direction, amount))
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (metal_strategy(), weight_strategy()).prop_map(|(metal, weight)| make_item(metal, weight))
}

fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..2_000_000_000i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance of a concatenation equals the sum of the parts' balances.
    #[test]
    fn prop_balance_is_additive(
        a in transactions_strategy(20),
        b in transactions_strategy(20),
    ) {
        let mut joined = a.clone();
        joined.extend(b.iter().cloned());

        prop_assert_eq!(
            compute_ledger_balance(&joined).unwrap(),
            compute_ledger_balance(&a).unwrap() + compute_ledger_balance(&b).unwrap()
        );
        prop_assert_eq!(
            compute_cash_totals(&joined).unwrap(),
            compute_cash_totals(&a)
                .unwrap()
                .combine(compute_cash_totals(&b).unwrap())
                .unwrap()
        );
    }

    /// Reordering transactions does not change the totals.
    #[test]
    fn prop_balance_order_independent(
        (original, shuffled) in transactions_strategy(30)
            .prop_flat_map(|txs| (Just(txs.clone()), Just(txs).prop_shuffle())),
    ) {
        prop_assert_eq!(
            compute_cash_totals(&original).unwrap(),
            compute_cash_totals(&shuffled).unwrap()
        );
    }

    /// Balance always equals received minus gave, and both sums are non-negative.
    #[test]
    fn prop_balance_equals_received_minus_gave(txs in transactions_strategy(30)) {
        let totals = compute_cash_totals(&txs).unwrap();
        prop_assert!(totals.total_gave >= Decimal::ZERO);
        prop_assert!(totals.total_received >= Decimal::ZERO);
        prop_assert_eq!(totals.balance, totals.total_received - totals.total_gave);

        let signed: Decimal = txs.iter().map(Transaction::signed_amount).sum();
        prop_assert_eq!(totals.balance, signed);
    }

    /// Gold-only lists have no silver weight, and vice versa.
    #[test]
    fn prop_weight_separated_by_metal(
        weights in prop::collection::vec(weight_strategy(), 0..20),
        metal in metal_strategy(),
    ) {
        let items: Vec<Item> = weights.iter().map(|w| make_item(metal, *w)).collect();
        let totals = compute_weight_totals(&items).unwrap();
        let expected: Decimal = weights.iter().copied().sum();

        match metal {
            MetalType::Gold => {
                prop_assert_eq!(totals.total_silver_weight, Decimal::ZERO);
                prop_assert_eq!(totals.total_gold_weight, expected);
            }
            MetalType::Silver => {
                prop_assert_eq!(totals.total_gold_weight, Decimal::ZERO);
                prop_assert_eq!(totals.total_silver_weight, expected);
            }
        }
    }

    /// The combined weight equals the sum of every item's weight.
    #[test]
    fn prop_total_weight_covers_all_items(items in prop::collection::vec(item_strategy(), 0..20)) {
        let totals = compute_weight_totals(&items).unwrap();
        let expected: Decimal = items.iter().map(|item| item.weight_in_tola).sum();
        prop_assert_eq!(totals.total().unwrap(), expected);
    }

    /// Settling pairs the flag with the timestamp; unsettling clears both.
    #[test]
    fn prop_settlement_pairing(
        item in item_strategy(),
        settled in any::<bool>(),
        now in timestamp_strategy(),
    ) {
        let result = set_item_settlement(item, settled, now);
        prop_assert_eq!(result.is_settled, settled);
        if settled {
            prop_assert_eq!(result.settled_at, Some(now));
        } else {
            prop_assert_eq!(result.settled_at, None);
        }
        prop_assert!(result.check_settlement_pair().is_ok());
    }
}
