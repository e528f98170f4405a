//! Buy-limit tracking module - usage models and the windowed fold.

mod limits_model;
mod limits_service;

pub use limits_model::{LimitGauge, LimitUsage};
pub use limits_service::{daily_gauge, monthly_gauge, usage};
