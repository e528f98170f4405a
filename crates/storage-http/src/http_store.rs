//! `TransactionStoreTrait` over a single web-app endpoint.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use fxledger_core::constants::DEFAULT_PAGE_SIZE;
use fxledger_core::errors::StoreError;
use fxledger_core::ledger::{Transaction, TransactionPage, TransactionStoreTrait};
use fxledger_core::Result;

use crate::payloads::{ListResponse, MutationPayload, MutationResponse};

/// Client for the deployed record store.
///
/// Listing is a GET with `page`/`limit` query parameters; every mutation is
/// an action-tagged POST to the same URL. No retries happen here - a failed
/// request surfaces as a failed refresh and the caller decides.
pub struct HttpTransactionStore {
    client: Client,
    base_url: String,
}

impl HttpTransactionStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Uses a caller-configured client (timeouts, proxies).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn post_mutation(&self, payload: &MutationPayload<'_>) -> Result<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Rejected(format!("HTTP {}: {}", status, body)).into());
        }

        let outcome: MutationResponse = response
            .json()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;
        if !outcome.is_success() {
            warn!("Record store refused a mutation: {}", outcome.status);
            return Err(StoreError::Rejected(outcome.status).into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionStoreTrait for HttpTransactionStore {
    async fn list(&self, page: u32, page_size: u32) -> Result<TransactionPage> {
        let url = reqwest::Url::parse_with_params(
            &self.base_url,
            &[
                ("page", page.to_string()),
                ("limit", page_size.to_string()),
            ],
        )
        .map_err(|e| StoreError::Unreachable(format!("Invalid store URL: {}", e)))?;

        debug!("Listing records (page {}, size {})", page, page_size);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(format!("HTTP {}", response.status())).into());
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;
        if body.status != "success" {
            return Err(StoreError::Rejected(body.status).into());
        }
        Ok(body.into_page())
    }

    async fn fetch_all(&self) -> Result<Vec<Transaction>> {
        // The store sends the unpaginated collection alongside any page;
        // fall back to the page itself for stores that do not.
        let page = self.list(1, DEFAULT_PAGE_SIZE).await?;
        Ok(page.all_records.unwrap_or(page.records))
    }

    async fn create(&self, record: &Transaction) -> Result<()> {
        self.post_mutation(&MutationPayload::Create { data: record })
            .await
    }

    async fn update(&self, record: &Transaction) -> Result<()> {
        self.post_mutation(&MutationPayload::Update { data: record })
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.post_mutation(&MutationPayload::Delete { id }).await
    }
}
