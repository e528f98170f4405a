use async_trait::async_trait;

use super::ledger_model::{LedgerView, NewTransaction, Transaction, TransactionPage, TransactionUpdate};
use crate::Result;

/// Trait defining the contract for the external transaction record store.
///
/// Mutations are full-record, fire-and-forget: there is no patch path, and
/// the only way to observe their effect is a full re-fetch.
#[async_trait]
pub trait TransactionStoreTrait: Send + Sync {
    /// One page of records plus the full-collection context the store sends
    /// along (its own analytics, the unpaginated collection).
    async fn list(&self, page: u32, page_size: u32) -> Result<TransactionPage>;

    /// The entire unpaginated collection.
    async fn fetch_all(&self) -> Result<Vec<Transaction>>;

    /// Creates a record. The id is client-generated and final.
    async fn create(&self, record: &Transaction) -> Result<()>;

    /// Replaces the full record stored under `record.id`.
    async fn update(&self, record: &Transaction) -> Result<()>;

    /// Removes the record stored under `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait defining the contract for ledger operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Fetches a page and the full collection, recomputes the snapshot, and
    /// replaces the cached view. A failed fetch leaves the cache untouched.
    async fn refresh(&self, page: u32, page_size: u32) -> Result<LedgerView>;

    /// The last successfully refreshed view, if any.
    async fn last_view(&self) -> Option<LedgerView>;

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;
    async fn delete_transaction(&self, id: &str) -> Result<()>;
}
