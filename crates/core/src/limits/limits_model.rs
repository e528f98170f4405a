//! Buy-limit domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ledger::Trader;

/// Raw per-trader KRW buy totals inside the current UTC calendar day and
/// month. Both traders are always present, zero when idle; the figures are
/// never clamped against the caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitUsage {
    pub daily: BTreeMap<Trader, Decimal>,
    pub monthly: BTreeMap<Trader, Decimal>,
}

impl LimitUsage {
    pub fn zeroed() -> Self {
        let zeroes = || {
            Trader::ALL
                .iter()
                .map(|t| (*t, Decimal::ZERO))
                .collect::<BTreeMap<_, _>>()
        };
        LimitUsage {
            daily: zeroes(),
            monthly: zeroes(),
        }
    }
}

impl Default for LimitUsage {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Display view of one usage figure against its cap.
///
/// `remaining` may go negative when a cap is exceeded; only `percent_used`
/// is clamped, for rendering a full bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitGauge {
    pub used: Decimal,
    pub cap: Decimal,
    pub remaining: Decimal,
    pub percent_used: Decimal,
}

impl LimitGauge {
    pub fn new(used: Decimal, cap: Decimal) -> Self {
        let percent_used = if cap > Decimal::ZERO {
            (used / cap * dec!(100)).min(dec!(100))
        } else {
            Decimal::ZERO
        };
        LimitGauge {
            used,
            cap,
            remaining: cap - used,
            percent_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_clamps_percent_but_not_remaining() {
        let gauge = LimitGauge::new(dec!(12_000_000), dec!(10_000_000));
        assert_eq!(gauge.percent_used, dec!(100));
        assert_eq!(gauge.remaining, dec!(-2_000_000));

        let gauge = LimitGauge::new(dec!(2_500_000), dec!(10_000_000));
        assert_eq!(gauge.percent_used, dec!(25));
        assert_eq!(gauge.remaining, dec!(7_500_000));
    }

    #[test]
    fn zeroed_usage_lists_every_trader() {
        let usage = LimitUsage::zeroed();
        for trader in Trader::ALL {
            assert_eq!(usage.daily[&trader], Decimal::ZERO);
            assert_eq!(usage.monthly[&trader], Decimal::ZERO);
        }
    }
}
