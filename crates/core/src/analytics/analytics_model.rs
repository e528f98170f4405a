//! Derived analytics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::currency::Currency;
use crate::limits::LimitUsage;

/// The derived state of the whole ledger, recomputed from scratch on every
/// read and never persisted on its own.
///
/// Wire keys match what the record store emits. Containers are ordered so
/// recomputing over the same collection serializes byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Realized P/L over all sells, in KRW.
    #[serde(rename = "totalPL")]
    pub total_pl: Decimal,
    /// Realized P/L of the current processing month; zero when no sell
    /// happened this month.
    #[serde(rename = "currentMonthPL")]
    pub current_month_pl: Decimal,
    /// Realized P/L bucketed by the `YYYY-MM` of each sell's own timestamp.
    #[serde(rename = "monthlyPL")]
    pub monthly_pl: BTreeMap<String, Decimal>,
    /// Open foreign-currency quantity per currency. Currencies without an
    /// open lot are absent, never zero.
    pub holdings: BTreeMap<Currency, Decimal>,
    /// Amount-weighted average buy rate over each currency's open lots.
    #[serde(rename = "avgBuyPrices")]
    pub avg_buy_prices: BTreeMap<Currency, Decimal>,
    /// Per-trader buy totals inside the current UTC day and month.
    #[serde(rename = "limitUsage")]
    pub limit_usage: LimitUsage,
    /// Buy lots already consumed by a sell.
    #[serde(rename = "soldBuyIds")]
    pub sold_buy_ids: BTreeSet<String>,
}
