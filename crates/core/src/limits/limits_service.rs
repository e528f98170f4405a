//! UTC-windowed buy totals per trader.

use chrono::{DateTime, Datelike, Utc};

use super::limits_model::{LimitGauge, LimitUsage};
use crate::constants::{DAILY_BUY_LIMIT_KRW, MONTHLY_BUY_LIMIT_KRW};
use crate::ledger::{Trader, Transaction};

/// Sums each trader's stored KRW cost over buys whose timestamp falls in the
/// current UTC calendar day and month. Sells never count against a cap.
pub fn usage(records: &[Transaction], now: DateTime<Utc>) -> LimitUsage {
    let today = now.date_naive();
    let mut usage = LimitUsage::zeroed();

    for record in records.iter().filter(|r| r.kind.is_buy()) {
        let date = record.timestamp.date_naive();
        if date == today {
            *usage.daily.entry(record.trader).or_default() += record.base_amount;
        }
        if date.year() == today.year() && date.month() == today.month() {
            *usage.monthly.entry(record.trader).or_default() += record.base_amount;
        }
    }

    usage
}

/// One trader's daily usage against the fixed daily cap.
pub fn daily_gauge(usage: &LimitUsage, trader: Trader) -> LimitGauge {
    let used = usage.daily.get(&trader).copied().unwrap_or_default();
    LimitGauge::new(used, DAILY_BUY_LIMIT_KRW)
}

/// One trader's monthly usage against the fixed monthly cap.
pub fn monthly_gauge(usage: &LimitUsage, trader: Trader) -> LimitGauge {
    let used = usage.monthly.get(&trader).copied().unwrap_or_default();
    LimitGauge::new(used, MONTHLY_BUY_LIMIT_KRW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use crate::ledger::TransactionKind;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(
        id: &str,
        trader: Trader,
        kind: TransactionKind,
        timestamp: &str,
        base_amount: Decimal,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            trader,
            kind,
            timestamp: timestamp.parse().unwrap(),
            currency: Currency::Usd,
            foreign_amount: dec!(100),
            rate: dec!(1300),
            base_amount,
            linked_buy_id: kind.is_sell().then(|| "b0".to_string()),
            fee: None,
            pl: None,
        }
    }

    #[test]
    fn windows_split_daily_from_monthly() {
        let records = vec![
            record(
                "b1",
                Trader::Sw,
                TransactionKind::Buy,
                "2024-01-20T10:00:00Z",
                dec!(130_000),
            ),
            record(
                "b2",
                Trader::Sw,
                TransactionKind::Buy,
                "2024-01-05T10:00:00Z",
                dec!(260_000),
            ),
            record(
                "b3",
                Trader::Sw,
                TransactionKind::Buy,
                "2023-12-31T10:00:00Z",
                dec!(500_000),
            ),
        ];
        let now = "2024-01-20T23:59:00Z".parse().unwrap();
        let usage = usage(&records, now);

        assert_eq!(usage.daily[&Trader::Sw], dec!(130_000));
        assert_eq!(usage.monthly[&Trader::Sw], dec!(390_000));
        assert_eq!(usage.daily[&Trader::Hr], Decimal::ZERO);
        assert_eq!(usage.monthly[&Trader::Hr], Decimal::ZERO);
    }

    #[test]
    fn traders_are_tracked_separately() {
        let records = vec![
            record(
                "b1",
                Trader::Sw,
                TransactionKind::Buy,
                "2024-01-20T10:00:00Z",
                dec!(1_000_000),
            ),
            record(
                "b2",
                Trader::Hr,
                TransactionKind::Buy,
                "2024-01-20T11:00:00Z",
                dec!(2_000_000),
            ),
        ];
        let now = "2024-01-20T23:59:00Z".parse().unwrap();
        let usage = usage(&records, now);
        assert_eq!(usage.daily[&Trader::Sw], dec!(1_000_000));
        assert_eq!(usage.daily[&Trader::Hr], dec!(2_000_000));
    }

    #[test]
    fn sells_never_count_against_a_cap() {
        let records = vec![
            record(
                "b1",
                Trader::Sw,
                TransactionKind::Buy,
                "2024-01-20T10:00:00Z",
                dec!(130_000),
            ),
            record(
                "s1",
                Trader::Sw,
                TransactionKind::Sell,
                "2024-01-20T12:00:00Z",
                dec!(132_000),
            ),
        ];
        let now = "2024-01-20T23:59:00Z".parse().unwrap();
        let usage = usage(&records, now);
        assert_eq!(usage.daily[&Trader::Sw], dec!(130_000));
        assert_eq!(usage.monthly[&Trader::Sw], dec!(130_000));
    }

    #[test]
    fn gauges_compare_usage_to_the_fixed_caps() {
        let records = vec![record(
            "b1",
            Trader::Hr,
            TransactionKind::Buy,
            "2024-01-20T10:00:00Z",
            dec!(2_500_000),
        )];
        let now = "2024-01-20T23:59:00Z".parse().unwrap();
        let usage = usage(&records, now);

        let daily = daily_gauge(&usage, Trader::Hr);
        assert_eq!(daily.cap, dec!(10_000_000));
        assert_eq!(daily.remaining, dec!(7_500_000));
        assert_eq!(daily.percent_used, dec!(25));

        let monthly = monthly_gauge(&usage, Trader::Hr);
        assert_eq!(monthly.cap, dec!(100_000_000));
        assert_eq!(monthly.remaining, dec!(97_500_000));
    }
}
