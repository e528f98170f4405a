//! Monthly and total realized P/L aggregation.

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::matcher::MatchedSale;

/// `YYYY-MM` bucket key for an instant.
pub fn month_key(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m").to_string()
}

/// Realized P/L buckets plus their grand total.
#[derive(Debug, Clone, Default)]
pub struct MonthlyAggregate {
    pub monthly_pl: BTreeMap<String, Decimal>,
    pub total_pl: Decimal,
}

/// Buckets each sell's realized P/L by the month of the sell's own
/// timestamp, never the processing time.
pub fn aggregate(
    matches: &[MatchedSale<'_>],
    realized_by_sale: &BTreeMap<String, Decimal>,
) -> MonthlyAggregate {
    let mut monthly_pl: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_pl = Decimal::ZERO;

    for m in matches {
        let pl = realized_by_sale
            .get(&m.sale.id)
            .copied()
            .unwrap_or(Decimal::ZERO);
        *monthly_pl.entry(m.sale.month_key()).or_insert(Decimal::ZERO) += pl;
        total_pl += pl;
    }

    MonthlyAggregate {
        monthly_pl,
        total_pl,
    }
}

/// The bucket matching `now`'s month; zero - not absent - when no sell
/// happened this month.
pub fn current_month_pl(monthly_pl: &BTreeMap<String, Decimal>, now: DateTime<Utc>) -> Decimal {
    monthly_pl
        .get(&month_key(&now))
        .copied()
        .unwrap_or_else(Decimal::zero)
}
