//! Wire shapes of the record-store protocol.

use serde::{Deserialize, Serialize};

use fxledger_core::analytics::AnalyticsSnapshot;
use fxledger_core::ledger::{Transaction, TransactionPage};

/// Action-tagged mutation body. Create and update carry the full record -
/// there are no partial or patch fields; delete carries the id alone.
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum MutationPayload<'a> {
    Create { data: &'a Transaction },
    Update { data: &'a Transaction },
    Delete { id: &'a str },
}

/// Outcome envelope of a mutation post.
#[derive(Debug, Deserialize)]
pub struct MutationResponse {
    pub status: String,
}

impl MutationResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Listing envelope: one page of records, the snapshot the store computed
/// over the entire collection, the total count, and optionally the whole
/// unpaginated collection for full-visibility consumers.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub status: String,
    #[serde(default)]
    pub records: Vec<Transaction>,
    #[serde(default)]
    pub analytics: Option<AnalyticsSnapshot>,
    #[serde(rename = "totalRecords", default)]
    pub total_records: u64,
    #[serde(rename = "allRecordsForFilter", default)]
    pub all_records_for_filter: Option<Vec<Transaction>>,
}

impl ListResponse {
    pub fn into_page(self) -> TransactionPage {
        TransactionPage {
            records: self.records,
            total_records: self.total_records,
            analytics: self.analytics,
            all_records: self.all_records_for_filter,
        }
    }
}
