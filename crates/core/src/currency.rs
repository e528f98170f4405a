//! Supported currencies and their quoting policies.
//!
//! Normalization rules (per-100 quoting, fee-bearing settlement) live here as
//! data so the realized-P/L calculator and the scenario simulator apply the
//! exact same rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Closed set of tradable foreign currencies and assets, priced in KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Jpy,
    Eur,
    Cad,
    Aud,
    Nzd,
    Hkd,
    Sgd,
    Btc,
}

/// How a currency's quoted rate and fees translate into KRW settlement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotePolicy {
    /// Foreign units one quoted rate refers to. JPY is quoted per 100 units.
    pub quote_unit: Decimal,
    /// Whether a KRW transfer fee applies: added to buy cost, subtracted
    /// from sell proceeds.
    pub fee_bearing: bool,
}

impl QuotePolicy {
    /// KRW price of a single foreign unit.
    pub fn normalized_rate(&self, rate: Decimal) -> Decimal {
        rate / self.quote_unit
    }

    /// KRW value of `foreign_amount` at `rate`, before any fee.
    pub fn gross_value(&self, foreign_amount: Decimal, rate: Decimal) -> Decimal {
        foreign_amount * self.normalized_rate(rate)
    }
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::Usd,
        Currency::Jpy,
        Currency::Eur,
        Currency::Cad,
        Currency::Aud,
        Currency::Nzd,
        Currency::Hkd,
        Currency::Sgd,
        Currency::Btc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Nzd => "NZD",
            Currency::Hkd => "HKD",
            Currency::Sgd => "SGD",
            Currency::Btc => "BTC",
        }
    }

    /// Quoting policy for this currency.
    pub fn policy(&self) -> QuotePolicy {
        match self {
            Currency::Jpy => QuotePolicy {
                quote_unit: dec!(100),
                fee_bearing: false,
            },
            Currency::Btc => QuotePolicy {
                quote_unit: Decimal::ONE,
                fee_bearing: true,
            },
            _ => QuotePolicy {
                quote_unit: Decimal::ONE,
                fee_bearing: false,
            },
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.to_uppercase())
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unsupported currency '{}'",
                    s
                )))
            })
    }
}
