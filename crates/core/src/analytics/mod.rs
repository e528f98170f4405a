//! Analytics module - the pure transaction-collection-to-snapshot transform.
//!
//! Everything here is synchronous and side-effect free: an ordered record
//! collection goes in, a complete [`AnalyticsSnapshot`] comes out, or the
//! whole computation fails. No partial snapshots.

mod analytics_model;
pub mod holdings;
pub mod matcher;
pub mod monthly;
pub mod realized;
mod snapshot;


pub use analytics_model::AnalyticsSnapshot;
pub use matcher::MatchedSale;
pub use snapshot::{compute_analytics, compute_snapshot, ComputedAnalytics};
