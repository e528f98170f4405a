//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analytics::AnalyticsSnapshot;
use crate::constants::BASE_AMOUNT_TOLERANCE_KRW;
use crate::currency::Currency;
use crate::ledger::ledger_errors::LedgerError;
use crate::Result;

/// Closed set of trader codes for this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trader {
    Sw,
    Hr,
}

impl Trader {
    pub const ALL: [Trader; 2] = [Trader::Sw, Trader::Hr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trader::Sw => "SW",
            Trader::Hr => "HR",
        }
    }
}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn is_buy(&self) -> bool {
        matches!(self, TransactionKind::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, TransactionKind::Sell)
    }
}

/// One ledger record: a foreign-currency buy (an acquisition lot) or a sell
/// closing exactly one lot.
///
/// Wire field names follow the record store's convention. Records are
/// immutable once created; an update replaces the full record under the same
/// id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub trader: Trader,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "target_currency")]
    pub currency: Currency,
    pub foreign_amount: Decimal,
    /// KRW per quoted unit of `currency` (per 100 units for JPY).
    #[serde(rename = "exchange_rate")]
    pub rate: Decimal,
    /// Stored KRW settlement value. Validated at write time against the
    /// recomputed settlement; P/L math never trusts it.
    pub base_amount: Decimal,
    /// The buy lot this sell closes. Present exactly on sells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_buy_id: Option<String>,
    /// KRW transfer fee. Only meaningful for the fee-bearing currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    /// Realized P/L attached to sells when a collection is listed. Derived,
    /// never part of a mutation payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<Decimal>,
}

impl Transaction {
    pub fn fee_amount(&self) -> Decimal {
        self.fee.unwrap_or(Decimal::ZERO)
    }

    /// `YYYY-MM` bucket key of this record's own timestamp (UTC).
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }

    /// KRW settlement implied by amount, rate and fee under the currency
    /// policy, rounded half-up to whole KRW like the entry form does.
    pub fn expected_base_amount(&self) -> Decimal {
        expected_base_amount(
            self.kind,
            self.currency,
            self.foreign_amount,
            self.rate,
            self.fee,
        )
    }

    /// Record-local integrity checks. Collection-level checks (link
    /// resolution, duplicate closure) are the matcher's job.
    pub fn validate(&self) -> Result<()> {
        if self.foreign_amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                id: self.id.clone(),
            }
            .into());
        }
        if self.rate <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveRate {
                id: self.id.clone(),
            }
            .into());
        }
        if self.fee_amount() < Decimal::ZERO {
            return Err(LedgerError::NegativeFee {
                id: self.id.clone(),
            }
            .into());
        }
        match self.kind {
            TransactionKind::Buy => {
                if self.linked_buy_id.is_some() {
                    return Err(LedgerError::UnexpectedLinkedBuy {
                        id: self.id.clone(),
                    }
                    .into());
                }
            }
            TransactionKind::Sell => {
                if self.linked_buy_id.as_deref().is_none_or(str::is_empty) {
                    return Err(LedgerError::MissingLinkedBuy {
                        id: self.id.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// KRW settlement for the given terms: `foreign_amount x normalized rate`,
/// fee added on buys and subtracted on sells for the fee-bearing currency,
/// rounded half-up to whole KRW.
pub fn expected_base_amount(
    kind: TransactionKind,
    currency: Currency,
    foreign_amount: Decimal,
    rate: Decimal,
    fee: Option<Decimal>,
) -> Decimal {
    let policy = currency.policy();
    let mut value = policy.gross_value(foreign_amount, rate);
    if policy.fee_bearing {
        let fee = fee.unwrap_or(Decimal::ZERO);
        value = match kind {
            TransactionKind::Buy => value + fee,
            TransactionKind::Sell => value - fee,
        };
    }
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn resolve_base_amount(
    id: &str,
    kind: TransactionKind,
    currency: Currency,
    foreign_amount: Decimal,
    rate: Decimal,
    fee: Option<Decimal>,
    declared: Option<Decimal>,
) -> Result<Decimal> {
    let expected = expected_base_amount(kind, currency, foreign_amount, rate, fee);
    match declared {
        Some(declared) => {
            if (declared - expected).abs() > BASE_AMOUNT_TOLERANCE_KRW {
                return Err(LedgerError::BaseAmountMismatch {
                    id: id.to_string(),
                    declared,
                    expected,
                }
                .into());
            }
            Ok(declared)
        }
        None => Ok(expected),
    }
}

/// Input model for creating a new transaction.
///
/// `id` is optional: when absent the service assigns a timestamp-derived one.
/// `base_amount` is recomputed when absent and validated when declared.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewTransaction {
    pub id: Option<String>,
    pub trader: Trader,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "target_currency")]
    pub currency: Currency,
    pub foreign_amount: Decimal,
    #[serde(rename = "exchange_rate")]
    pub rate: Decimal,
    #[serde(default)]
    pub base_amount: Option<Decimal>,
    #[serde(default)]
    pub linked_buy_id: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: String) -> Result<Transaction> {
        let base_amount = resolve_base_amount(
            &id,
            self.kind,
            self.currency,
            self.foreign_amount,
            self.rate,
            self.fee,
            self.base_amount,
        )?;
        let record = Transaction {
            id,
            trader: self.trader,
            kind: self.kind,
            timestamp: self.timestamp,
            currency: self.currency,
            foreign_amount: self.foreign_amount,
            rate: self.rate,
            base_amount,
            linked_buy_id: self.linked_buy_id,
            fee: self.fee,
            pl: None,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Input model for replacing an existing transaction. The id is preserved.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransactionUpdate {
    pub id: String,
    pub trader: Trader,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "target_currency")]
    pub currency: Currency,
    pub foreign_amount: Decimal,
    #[serde(rename = "exchange_rate")]
    pub rate: Decimal,
    #[serde(default)]
    pub base_amount: Option<Decimal>,
    #[serde(default)]
    pub linked_buy_id: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
}

impl TransactionUpdate {
    pub fn into_transaction(self) -> Result<Transaction> {
        let base_amount = resolve_base_amount(
            &self.id,
            self.kind,
            self.currency,
            self.foreign_amount,
            self.rate,
            self.fee,
            self.base_amount,
        )?;
        let record = Transaction {
            id: self.id,
            trader: self.trader,
            kind: self.kind,
            timestamp: self.timestamp,
            currency: self.currency,
            foreign_amount: self.foreign_amount,
            rate: self.rate,
            base_amount,
            linked_buy_id: self.linked_buy_id,
            fee: self.fee,
            pl: None,
        };
        record.validate()?;
        Ok(record)
    }
}

/// One page of records as served by the store, plus whatever full-collection
/// context it provides alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPage {
    pub records: Vec<Transaction>,
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
    /// Snapshot the store computed over the entire collection, if it did.
    /// The engine recomputes its own regardless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsSnapshot>,
    /// The entire unpaginated collection, when the store sends it along.
    #[serde(
        rename = "allRecordsForFilter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub all_records: Option<Vec<Transaction>>,
}

/// A consistent read of the ledger: one page for display, the full
/// collection for matching and simulation, and the snapshot recomputed over
/// that same collection. Sells carry their realized P/L.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerView {
    pub records: Vec<Transaction>,
    pub all_records: Vec<Transaction>,
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
    pub analytics: AnalyticsSnapshot,
}

impl LedgerView {
    /// Still-open buy lots for a trader, optionally narrowed to one
    /// currency. This feeds the sell form and the scenario lot picker.
    pub fn open_lots(&self, trader: Trader, currency: Option<Currency>) -> Vec<&Transaction> {
        self.all_records
            .iter()
            .filter(|r| r.kind.is_buy() && r.trader == trader)
            .filter(|r| currency.is_none_or(|c| r.currency == c))
            .filter(|r| !self.analytics.sold_buy_ids.contains(&r.id))
            .collect()
    }
}
