//! Property-based integration tests for the analytics snapshot.
//!
//! These tests verify that universal properties hold across all valid
//! transaction collections, using the `proptest` crate for random test case
//! generation.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use fxledger_core::analytics::compute_snapshot;
use fxledger_core::currency::Currency;
use fxledger_core::ledger::{expected_base_amount, Trader, Transaction, TransactionKind};

// =============================================================================
// Generators
// =============================================================================

/// One acquisition lot, optionally closed by a matching sell.
#[derive(Debug, Clone)]
struct LotCase {
    trader: Trader,
    currency: Currency,
    amount: u32,
    rate: u32,
    buy_month: u32,
    close: Option<(u32, u32)>, // (sell rate, sell month)
}

fn arb_trader() -> impl Strategy<Value = Trader> {
    prop_oneof![Just(Trader::Sw), Just(Trader::Hr)]
}

fn arb_currency() -> impl Strategy<Value = Currency> {
    proptest::sample::select(&Currency::ALL[..])
}

fn arb_lot_case() -> impl Strategy<Value = LotCase> {
    (
        arb_trader(),
        arb_currency(),
        1u32..10_000,
        1u32..100_000,
        1u32..=5,
        proptest::option::of((1u32..100_000, 1u32..=6u32)),
    )
        .prop_map(|(trader, currency, amount, rate, buy_month, close)| LotCase {
            trader,
            currency,
            amount,
            rate,
            buy_month,
            close,
        })
}

fn arb_lot_cases(max_count: usize) -> impl Strategy<Value = Vec<LotCase>> {
    proptest::collection::vec(arb_lot_case(), 0..=max_count)
}

/// Materializes a valid transaction collection: lot `i` gets id `b{i}`, and
/// a closed lot also gets the sell `s{i}` that names it.
fn build_records(cases: &[LotCase]) -> Vec<Transaction> {
    let mut records = Vec::new();
    for (i, case) in cases.iter().enumerate() {
        let buy_id = format!("b{}", i);
        let amount = Decimal::from(case.amount);
        let rate = Decimal::from(case.rate);
        records.push(Transaction {
            id: buy_id.clone(),
            trader: case.trader,
            kind: TransactionKind::Buy,
            timestamp: parse_ts(case.buy_month, 10),
            currency: case.currency,
            foreign_amount: amount,
            rate,
            base_amount: expected_base_amount(
                TransactionKind::Buy,
                case.currency,
                amount,
                rate,
                None,
            ),
            linked_buy_id: None,
            fee: None,
            pl: None,
        });
        if let Some((sell_rate, sell_month)) = case.close {
            let sell_rate = Decimal::from(sell_rate);
            records.push(Transaction {
                id: format!("s{}", i),
                trader: case.trader,
                kind: TransactionKind::Sell,
                timestamp: parse_ts(sell_month, 20),
                currency: case.currency,
                foreign_amount: amount,
                rate: sell_rate,
                base_amount: expected_base_amount(
                    TransactionKind::Sell,
                    case.currency,
                    amount,
                    sell_rate,
                    None,
                ),
                linked_buy_id: Some(buy_id),
                fee: None,
                pl: None,
            });
        }
    }
    records
}

fn parse_ts(month: u32, day: u32) -> DateTime<Utc> {
    format!("2024-{:02}-{:02}T09:00:00Z", month, day)
        .parse()
        .unwrap()
}

fn fixed_now() -> DateTime<Utc> {
    "2024-06-15T12:00:00Z".parse().unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The monthly buckets always sum exactly to the grand total.
    #[test]
    fn prop_monthly_buckets_sum_to_total(cases in arb_lot_cases(30)) {
        let records = build_records(&cases);
        let snapshot = compute_snapshot(&records, fixed_now()).unwrap();

        let bucket_sum: Decimal = snapshot.monthly_pl.values().sum();
        prop_assert_eq!(bucket_sum, snapshot.total_pl);
    }

    /// Holdings and average buy price are present for exactly the currencies
    /// with an open lot, and the average sits inside the open lots' rate range.
    #[test]
    fn prop_open_lot_presence_and_avg_bounds(cases in arb_lot_cases(30)) {
        let records = build_records(&cases);
        let snapshot = compute_snapshot(&records, fixed_now()).unwrap();

        // expected per-currency open rate ranges, straight from the generated cases
        let mut open_rates: BTreeMap<Currency, (u32, u32)> = BTreeMap::new();
        for case in cases.iter().filter(|s| s.close.is_none()) {
            let entry = open_rates.entry(case.currency).or_insert((case.rate, case.rate));
            entry.0 = entry.0.min(case.rate);
            entry.1 = entry.1.max(case.rate);
        }

        for currency in Currency::ALL {
            let open = open_rates.contains_key(&currency);
            prop_assert_eq!(snapshot.holdings.contains_key(&currency), open);
            prop_assert_eq!(snapshot.avg_buy_prices.contains_key(&currency), open);
            if let Some((min_rate, max_rate)) = open_rates.get(&currency) {
                let avg = snapshot.avg_buy_prices[&currency];
                prop_assert!(avg >= Decimal::from(*min_rate));
                prop_assert!(avg <= Decimal::from(*max_rate));
            }
        }
    }

    /// The closed-lot set is exactly the linked ids, each closed once.
    #[test]
    fn prop_closed_set_matches_the_sells(cases in arb_lot_cases(30)) {
        let records = build_records(&cases);
        let snapshot = compute_snapshot(&records, fixed_now()).unwrap();

        let closed_count = cases.iter().filter(|s| s.close.is_some()).count();
        prop_assert_eq!(snapshot.sold_buy_ids.len(), closed_count);
        for (i, case) in cases.iter().enumerate() {
            prop_assert_eq!(
                snapshot.sold_buy_ids.contains(&format!("b{}", i)),
                case.close.is_some()
            );
        }
    }

    /// Recomputing over the same collection is idempotent down to the bytes.
    #[test]
    fn prop_recompute_is_byte_identical(cases in arb_lot_cases(30)) {
        let records = build_records(&cases);
        let first = compute_snapshot(&records, fixed_now()).unwrap();
        let second = compute_snapshot(&records, fixed_now()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Record order never changes the snapshot.
    #[test]
    fn prop_snapshot_is_order_independent(cases in arb_lot_cases(20)) {
        let records = build_records(&cases);
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = compute_snapshot(&records, fixed_now()).unwrap();
        let backward = compute_snapshot(&reversed, fixed_now()).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
