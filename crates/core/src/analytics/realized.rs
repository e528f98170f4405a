//! Realized P/L per matched sell.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::matcher::MatchedSale;
use crate::ledger::Transaction;

/// KRW profit or loss realized by `sale` closing `lot`.
///
/// Both sides are recomputed from `foreign_amount x normalized rate` under
/// the currency policy - the stored `base_amount` may carry rounding or fee
/// artifacts and is never trusted here. For the fee-bearing currency the buy
/// fee raises the cost and the sell fee lowers the proceeds.
pub fn realized_profit(sale: &Transaction, lot: &Transaction) -> Decimal {
    let policy = sale.currency.policy();
    let mut proceeds = policy.gross_value(sale.foreign_amount, sale.rate);
    let mut cost = policy.gross_value(lot.foreign_amount, lot.rate);
    if policy.fee_bearing {
        proceeds -= sale.fee_amount();
        cost += lot.fee_amount();
    }
    proceeds - cost
}

/// Realized P/L keyed by sell id. Buys never carry a P/L figure.
pub fn realized_by_sale(matches: &[MatchedSale<'_>]) -> BTreeMap<String, Decimal> {
    matches
        .iter()
        .map(|m| (m.sale.id.clone(), realized_profit(m.sale, m.lot)))
        .collect()
}
