//! Open-lot holdings and weighted-average acquisition cost.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

use crate::currency::Currency;
use crate::ledger::Transaction;

/// Per-currency open quantity and amount-weighted average buy rate.
#[derive(Debug, Clone, Default)]
pub struct OpenHoldings {
    pub holdings: BTreeMap<Currency, Decimal>,
    pub avg_buy_prices: BTreeMap<Currency, Decimal>,
}

/// Folds the still-open buy lots (those not in `closed`) into per-currency
/// totals. The average is weighted by lot size - a 1-unit lot and a
/// 1,000-unit lot must not count equally - and uses the raw stored rate.
/// Currencies without an open lot appear in neither map.
pub fn open_holdings(records: &[Transaction], closed: &BTreeSet<String>) -> OpenHoldings {
    let mut quantity: BTreeMap<Currency, Decimal> = BTreeMap::new();
    let mut weighted_rate: BTreeMap<Currency, Decimal> = BTreeMap::new();

    for lot in records
        .iter()
        .filter(|r| r.kind.is_buy() && !closed.contains(&r.id))
    {
        *quantity.entry(lot.currency).or_insert(Decimal::ZERO) += lot.foreign_amount;
        *weighted_rate.entry(lot.currency).or_insert(Decimal::ZERO) +=
            lot.foreign_amount * lot.rate;
    }

    let avg_buy_prices = quantity
        .iter()
        .filter(|(_, total)| !total.is_zero())
        .map(|(currency, total)| (*currency, weighted_rate[currency] / total))
        .collect();

    OpenHoldings {
        holdings: quantity,
        avg_buy_prices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Trader, TransactionKind};
    use rust_decimal_macros::dec;

    fn lot(id: &str, trader: Trader, currency: Currency, amount: Decimal, rate: Decimal) -> Transaction {
        Transaction {
            id: id.to_string(),
            trader,
            kind: TransactionKind::Buy,
            timestamp: "2024-01-10T09:00:00Z".parse().unwrap(),
            currency,
            foreign_amount: amount,
            rate,
            base_amount: amount * rate,
            linked_buy_id: None,
            fee: None,
            pl: None,
        }
    }

    #[test]
    fn average_is_amount_weighted() {
        let records = vec![
            lot("b1", Trader::Sw, Currency::Usd, dec!(1), dec!(1000)),
            lot("b2", Trader::Sw, Currency::Usd, dec!(1000), dec!(1300)),
        ];
        let open = open_holdings(&records, &BTreeSet::new());
        assert_eq!(open.holdings[&Currency::Usd], dec!(1001));
        // (1*1000 + 1000*1300) / 1001, nowhere near the simple mean of 1150
        let avg = open.avg_buy_prices[&Currency::Usd];
        assert!(avg > dec!(1299) && avg < dec!(1300));
    }

    #[test]
    fn closed_lots_drop_out_of_both_maps() {
        let records = vec![
            lot("b1", Trader::Sw, Currency::Usd, dec!(100), dec!(1300)),
            lot("b2", Trader::Hr, Currency::Eur, dec!(50), dec!(1400)),
        ];
        let closed = BTreeSet::from(["b1".to_string()]);
        let open = open_holdings(&records, &closed);
        assert!(!open.holdings.contains_key(&Currency::Usd));
        assert!(!open.avg_buy_prices.contains_key(&Currency::Usd));
        assert_eq!(open.holdings[&Currency::Eur], dec!(50));
        assert_eq!(open.avg_buy_prices[&Currency::Eur], dec!(1400));
    }

    #[test]
    fn holdings_pool_across_traders() {
        let records = vec![
            lot("b1", Trader::Sw, Currency::Usd, dec!(100), dec!(1300)),
            lot("b2", Trader::Hr, Currency::Usd, dec!(100), dec!(1310)),
        ];
        let open = open_holdings(&records, &BTreeSet::new());
        assert_eq!(open.holdings[&Currency::Usd], dec!(200));
        assert_eq!(open.avg_buy_prices[&Currency::Usd], dec!(1305));
    }

    #[test]
    fn empty_collection_yields_empty_maps() {
        let open = open_holdings(&[], &BTreeSet::new());
        assert!(open.holdings.is_empty());
        assert!(open.avg_buy_prices.is_empty());
    }
}
