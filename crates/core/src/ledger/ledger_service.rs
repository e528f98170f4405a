use chrono::Utc;
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::RwLock;

use async_trait::async_trait;

use super::ledger_errors::LedgerError;
use super::ledger_model::{
    LedgerView, NewTransaction, Transaction, TransactionUpdate,
};
use super::ledger_traits::{LedgerServiceTrait, TransactionStoreTrait};
use crate::analytics::compute_analytics;
use crate::Result;

/// Service for managing ledger transactions.
///
/// Validates mutations against the current collection before they reach the
/// store, and keeps the last successfully computed view so a failed refresh
/// never blanks previously displayed state.
pub struct LedgerService {
    store: Arc<dyn TransactionStoreTrait>,
    last_view: RwLock<Option<LedgerView>>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn TransactionStoreTrait>) -> Self {
        Self {
            store,
            last_view: RwLock::new(None),
        }
    }

    /// Creator-assigned record id, derived from the creation instant.
    fn next_id() -> String {
        format!("t{}", Utc::now().timestamp_millis())
    }

    /// Collection-level preconditions for a record about to be written.
    ///
    /// The record itself is excluded from the duplicate-closure check so an
    /// update does not collide with the stored version it replaces.
    fn check_against_collection(candidate: &Transaction, existing: &[Transaction]) -> Result<()> {
        if !candidate.kind.is_sell() {
            return Ok(());
        }
        let buy_id = candidate
            .linked_buy_id
            .as_deref()
            .ok_or_else(|| LedgerError::MissingLinkedBuy {
                id: candidate.id.clone(),
            })?;
        let lot = existing
            .iter()
            .find(|r| r.id == buy_id)
            .ok_or_else(|| LedgerError::UnknownLinkedBuy {
                sell_id: candidate.id.clone(),
                buy_id: buy_id.to_string(),
            })?;
        if !lot.kind.is_buy() {
            return Err(LedgerError::LinkedRecordNotABuy {
                sell_id: candidate.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if lot.trader != candidate.trader {
            return Err(LedgerError::LotTraderMismatch {
                sell_id: candidate.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if lot.currency != candidate.currency {
            return Err(LedgerError::LotCurrencyMismatch {
                sell_id: candidate.id.clone(),
                buy_id: buy_id.to_string(),
            }
            .into());
        }
        if let Some(closer) = existing.iter().find(|r| {
            r.kind.is_sell() && r.id != candidate.id && r.linked_buy_id.as_deref() == Some(buy_id)
        }) {
            return Err(LedgerError::LotAlreadySold {
                buy_id: buy_id.to_string(),
                closed_by: closer.id.clone(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn refresh(&self, page: u32, page_size: u32) -> Result<LedgerView> {
        debug!("Refreshing ledger view (page {}, size {})", page, page_size);
        let page_data = match self.store.list(page, page_size).await {
            Ok(page_data) => page_data,
            Err(e) => {
                error!("Ledger refresh failed, keeping last good view: {}", e);
                return Err(e);
            }
        };

        let mut all_records = page_data
            .all_records
            .unwrap_or_else(|| page_data.records.clone());
        let computed = compute_analytics(&all_records, Utc::now())?;

        for record in &mut all_records {
            record.pl = computed.realized_by_sale.get(&record.id).copied();
        }
        let records = page_data
            .records
            .into_iter()
            .map(|mut record| {
                record.pl = computed.realized_by_sale.get(&record.id).copied();
                record
            })
            .collect();

        let view = LedgerView {
            records,
            all_records,
            total_records: page_data.total_records,
            analytics: computed.snapshot,
        };
        *self.last_view.write().await = Some(view.clone());
        Ok(view)
    }

    async fn last_view(&self) -> Option<LedgerView> {
        self.last_view.read().await.clone()
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let id = new_transaction.id.clone().unwrap_or_else(Self::next_id);
        let record = new_transaction.into_transaction(id)?;

        let existing = self.store.fetch_all().await?;
        Self::check_against_collection(&record, &existing)?;

        self.store.create(&record).await?;
        debug!("Created transaction {} ({})", record.id, record.currency);
        Ok(record)
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        let record = update.into_transaction()?;

        let existing = self.store.fetch_all().await?;
        if !existing.iter().any(|r| r.id == record.id) {
            return Err(LedgerError::NotFound {
                id: record.id.clone(),
            }
            .into());
        }
        Self::check_against_collection(&record, &existing)?;

        self.store.update(&record).await?;
        debug!("Updated transaction {}", record.id);
        Ok(record)
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        let existing = self.store.fetch_all().await?;
        let record = existing
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::NotFound { id: id.to_string() })?;

        // A lot stays deletable only while nothing references it.
        if record.kind.is_buy() {
            if let Some(sale) = existing
                .iter()
                .find(|r| r.kind.is_sell() && r.linked_buy_id.as_deref() == Some(id))
            {
                return Err(LedgerError::LotStillReferenced {
                    buy_id: id.to_string(),
                    sell_id: sale.id.clone(),
                }
                .into());
            }
        }

        self.store.delete(id).await?;
        debug!("Deleted transaction {}", id);
        Ok(())
    }
}
