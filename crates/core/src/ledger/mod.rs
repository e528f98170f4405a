//! Ledger module - domain models, services, and traits.

mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;


pub use ledger_errors::LedgerError;
pub use ledger_model::{
    expected_base_amount, LedgerView, NewTransaction, Trader, Transaction, TransactionKind,
    TransactionPage, TransactionUpdate,
};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerServiceTrait, TransactionStoreTrait};
