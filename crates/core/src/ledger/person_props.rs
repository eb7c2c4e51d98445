//! Property-based tests for person aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::compute_ledger_balance;
use super::balance::tests::make_transaction;
use super::items::tests::make_item;
use super::person::{PersonSummary, aggregate_person};
use super::summary::summarize_ledger;
use super::summary::tests::make_ledger;
use super::types::{Direction, Ledger, MetalType};

fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    let transactions = prop::collection::vec(
        (
            prop_oneof![Just(Direction::Gave), Just(Direction::Received)],
            (0i64..10_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2)),
        ),
        0..8,
    );
    let items = prop::collection::vec(
        (
            prop_oneof![Just(MetalType::Gold), Just(MetalType::Silver)],
            (0i64..100_000i64).prop_map(|milli| Decimal::new(milli, 3)),
        ),
        0..5,
    );

    (any::<bool>(), transactions, items).prop_map(|(settled, txs, items)| {
        make_ledger(
            "d",
            "p1",
            settled,
            items.into_iter().map(|(m, w)| make_item(m, w)).collect(),
            txs.into_iter().map(|(d, a)| make_transaction(d, a)).collect(),
        )
    })
}

fn ledgers_strategy() -> impl Strategy<Value = Vec<Ledger>> {
    prop::collection::vec(ledger_strategy(), 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering ledgers does not change the person's summary.
    #[test]
    fn prop_aggregate_order_independent(
        (original, shuffled) in ledgers_strategy()
            .prop_flat_map(|ledgers| (Just(ledgers.clone()), Just(ledgers).prop_shuffle())),
    ) {
        prop_assert_eq!(
            aggregate_person(&original).unwrap(),
            aggregate_person(&shuffled).unwrap()
        );
    }

    /// Total balance is the sum of each ledger's own balance.
    #[test]
    fn prop_total_balance_is_sum_of_ledgers(ledgers in ledgers_strategy()) {
        let summary = aggregate_person(&ledgers).unwrap();
        let expected: Decimal = ledgers
            .iter()
            .map(|ledger| compute_ledger_balance(&ledger.transactions).unwrap())
            .sum();
        prop_assert_eq!(summary.total_balance, expected);
    }

    /// Metal totals are the sums of the per-ledger weight totals.
    #[test]
    fn prop_metal_totals_are_sums(ledgers in ledgers_strategy()) {
        let summary = aggregate_person(&ledgers).unwrap();
        let (gold, silver) = ledgers.iter().fold((Decimal::ZERO, Decimal::ZERO), |(g, s), ledger| {
            let ledger_summary = summarize_ledger(ledger).unwrap();
            (g + ledger_summary.total_gold_weight, s + ledger_summary.total_silver_weight)
        });
        prop_assert_eq!(summary.total_gold, gold);
        prop_assert_eq!(summary.total_silver, silver);
    }

    /// Unsettled count only looks at the stored ledger flag.
    #[test]
    fn prop_unsettled_count_matches_flags(ledgers in ledgers_strategy()) {
        let summary = aggregate_person(&ledgers).unwrap();
        let expected = ledgers.iter().filter(|ledger| !ledger.is_settled).count();
        prop_assert_eq!(summary.unsettled_ledger_count, expected);
        prop_assert_eq!(summary.ledger_count, ledgers.len());
    }

    /// Splitting the ledger list and adding the halves gives the same balance.
    #[test]
    fn prop_aggregate_is_additive(a in ledgers_strategy(), b in ledgers_strategy()) {
        let mut joined = a.clone();
        joined.extend(b.iter().cloned());
        let left = aggregate_person(&a).unwrap();
        let right = aggregate_person(&b).unwrap();

        prop_assert_eq!(
            aggregate_person(&joined).unwrap(),
            PersonSummary {
                total_balance: left.total_balance + right.total_balance,
                total_gold: left.total_gold + right.total_gold,
                total_silver: left.total_silver + right.total_silver,
                unsettled_ledger_count: left.unsettled_ledger_count + right.unsettled_ledger_count,
                ledger_count: left.ledger_count + right.ledger_count,
            }
        );
    }
}

#[test]
fn test_empty_aggregate_identity() {
    let summary = aggregate_person(&[]).unwrap();
    assert_eq!(summary.total_balance, Decimal::ZERO);
    assert_eq!(summary.total_gold, Decimal::ZERO);
    assert_eq!(summary.total_silver, Decimal::ZERO);
    assert_eq!(summary.unsettled_ledger_count, 0);
}
