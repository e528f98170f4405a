//! HTTP record-store client for fxledger.
//!
//! This crate is the only place where transport dependencies exist. It
//! implements the `TransactionStoreTrait` defined in `fxledger-core` against
//! the deployed record store: a single web-app endpoint that lists records
//! via query parameters and takes action-tagged JSON posts for mutations.
//!
//! ```text
//!       core (domain)
//!             │
//!             ▼
//!   storage-http (this crate)
//!             │
//!             ▼
//!    record store endpoint
//! ```

mod http_store;
mod payloads;

pub use http_store::HttpTransactionStore;
pub use payloads::{ListResponse, MutationPayload, MutationResponse};
