//! Scenario module - what-if disposal projections for one open lot.

mod scenario_model;
mod scenario_service;

pub use scenario_model::{ScenarioBand, ScenarioPoint};
pub use scenario_service::{default_offsets, simulate, simulate_default};
