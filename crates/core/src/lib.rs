//! Fxledger Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for fxledger: the transaction
//! domain model, the pure analytics transform (lot matching, realized P/L,
//! holdings, monthly aggregation, buy-limit usage), and the what-if disposal
//! simulator. It is store-agnostic and defines traits that are implemented
//! by the `storage-http` crate.

pub mod analytics;
pub mod constants;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod limits;
pub mod scenario;

// Re-export common types from the ledger and analytics modules
pub use analytics::*;
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
