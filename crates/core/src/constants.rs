use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// KRW cap on one trader's buys within a single UTC calendar day.
pub const DAILY_BUY_LIMIT_KRW: Decimal = dec!(10_000_000);

/// KRW cap on one trader's buys within a single UTC calendar month.
pub const MONTHLY_BUY_LIMIT_KRW: Decimal = dec!(100_000_000);

/// Default page size for record listings.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Half-width of the default scenario offset band (rates rate-N..rate+N, 0 skipped).
pub const SCENARIO_OFFSET_SPAN: i32 = 5;

/// Tolerated divergence between a declared base amount and the recomputed
/// settlement amount, in whole KRW. Covers rounding applied by the entry form.
pub const BASE_AMOUNT_TOLERANCE_KRW: Decimal = Decimal::ONE;
