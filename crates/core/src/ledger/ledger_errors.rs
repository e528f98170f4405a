use rust_decimal::Decimal;
use thiserror::Error;

/// Data-integrity violations in the transaction collection.
///
/// Any of these aborts the snapshot computation for the whole collection: a
/// broken record is surfaced distinctly, never coerced to a zero result or
/// silently skipped.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction {id}: foreign amount must be positive")]
    NonPositiveAmount { id: String },

    #[error("Transaction {id}: exchange rate must be positive")]
    NonPositiveRate { id: String },

    #[error("Transaction {id}: fee cannot be negative")]
    NegativeFee { id: String },

    #[error("Sell {id} does not name the buy lot it closes")]
    MissingLinkedBuy { id: String },

    #[error("Buy {id} cannot reference another lot")]
    UnexpectedLinkedBuy { id: String },

    #[error("Sell {sell_id} references unknown lot {buy_id}")]
    UnknownLinkedBuy { sell_id: String, buy_id: String },

    #[error("Sell {sell_id} references {buy_id}, which is not a buy")]
    LinkedRecordNotABuy { sell_id: String, buy_id: String },

    #[error("Sell {sell_id} and lot {buy_id} belong to different traders")]
    LotTraderMismatch { sell_id: String, buy_id: String },

    #[error("Sell {sell_id} and lot {buy_id} are denominated in different currencies")]
    LotCurrencyMismatch { sell_id: String, buy_id: String },

    #[error("Lot {buy_id} is already closed by sell {closed_by}")]
    LotAlreadySold { buy_id: String, closed_by: String },

    #[error("Buy {buy_id} is still referenced by sell {sell_id} and cannot be deleted")]
    LotStillReferenced { buy_id: String, sell_id: String },

    #[error("Transaction {id}: declared base amount {declared} diverges from settlement {expected}")]
    BaseAmountMismatch {
        id: String,
        declared: Decimal,
        expected: Decimal,
    },

    #[error("Transaction {id} does not exist")]
    NotFound { id: String },

    #[error("Record {id} is not an open buy lot")]
    NotAnOpenLot { id: String },
}
