//! Explicit sell-to-lot matching.

use std::collections::{BTreeMap, BTreeSet};

use crate::ledger::{LedgerError, Transaction};
use crate::Result;

/// A sell paired with the buy lot it closes.
#[derive(Debug, Clone, Copy)]
pub struct MatchedSale<'a> {
    pub sale: &'a Transaction,
    pub lot: &'a Transaction,
}

/// Resolves every sell in the collection to its designated lot and returns
/// the matches plus the set of closed lot ids.
///
/// Matching is explicit only: the lot a sell closes is the one its
/// `linked_buy_id` names, never one inferred by FIFO/LIFO or proximity. A
/// sell with a missing, dangling, or mismatched reference - or one closing a
/// lot some other sell already closed - is a data-integrity error that fails
/// the whole computation.
pub fn match_sales(records: &[Transaction]) -> Result<(Vec<MatchedSale<'_>>, BTreeSet<String>)> {
    let by_id: BTreeMap<&str, &Transaction> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();

    // lot id -> id of the sell that closed it
    let mut closed_by: BTreeMap<&str, &str> = BTreeMap::new();
    let mut matches = Vec::new();

    for sale in records.iter().filter(|r| r.kind.is_sell()) {
        let buy_id =
            sale.linked_buy_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| LedgerError::MissingLinkedBuy {
                    id: sale.id.clone(),
                })?;
        let lot = *by_id
            .get(buy_id)
            .ok_or_else(|| LedgerError::UnknownLinkedBuy {
                sell_id: sale.id.clone(),
                buy_id: buy_id.to_string(),
            })?;
        if !lot.kind.is_buy() {
            return Err(LedgerError::LinkedRecordNotABuy {
                sell_id: sale.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if lot.trader != sale.trader {
            return Err(LedgerError::LotTraderMismatch {
                sell_id: sale.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if lot.currency != sale.currency {
            return Err(LedgerError::LotCurrencyMismatch {
                sell_id: sale.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if let Some(first) = closed_by.insert(buy_id, sale.id.as_str()) {
            return Err(LedgerError::LotAlreadySold {
                buy_id: buy_id.to_string(),
                closed_by: first.to_string(),
            }
            .into());
        }
        matches.push(MatchedSale { sale, lot });
    }

    let closed = closed_by.keys().map(|id| id.to_string()).collect();
    Ok((matches, closed))
}
