//! The collection-to-snapshot transform.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::analytics_model::AnalyticsSnapshot;
use super::{holdings, matcher, monthly, realized};
use crate::ledger::Transaction;
use crate::limits;
use crate::Result;

/// A snapshot plus the per-sell realized P/L it was derived from, so callers
/// can annotate listed records without re-running the match.
#[derive(Debug, Clone)]
pub struct ComputedAnalytics {
    pub snapshot: AnalyticsSnapshot,
    pub realized_by_sale: BTreeMap<String, Decimal>,
}

/// Derives the full analytics state from an ordered record collection.
///
/// Pure and order-independent: the same collection always yields the same
/// snapshot, regardless of record order or how often it is recomputed. Any
/// integrity error in any record fails the whole computation - the five
/// derived views are either all consistent or absent.
pub fn compute_analytics(
    records: &[Transaction],
    now: DateTime<Utc>,
) -> Result<ComputedAnalytics> {
    for record in records {
        record.validate()?;
    }

    let (matches, sold_buy_ids) = matcher::match_sales(records)?;
    let realized_by_sale = realized::realized_by_sale(&matches);
    let monthly::MonthlyAggregate {
        monthly_pl,
        total_pl,
    } = monthly::aggregate(&matches, &realized_by_sale);
    let current_month_pl = monthly::current_month_pl(&monthly_pl, now);
    let holdings::OpenHoldings {
        holdings,
        avg_buy_prices,
    } = holdings::open_holdings(records, &sold_buy_ids);
    let limit_usage = limits::usage(records, now);

    Ok(ComputedAnalytics {
        snapshot: AnalyticsSnapshot {
            total_pl,
            current_month_pl,
            monthly_pl,
            holdings,
            avg_buy_prices,
            limit_usage,
            sold_buy_ids,
        },
        realized_by_sale,
    })
}

/// [`compute_analytics`] without the per-sell breakdown.
pub fn compute_snapshot(records: &[Transaction], now: DateTime<Utc>) -> Result<AnalyticsSnapshot> {
    Ok(compute_analytics(records, now)?.snapshot)
}
