//! Scenario simulation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One hypothetical disposal: the candidate rate and the KRW P/L it would
/// realize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    pub rate: Decimal,
    pub pl: Decimal,
}

/// Projected outcomes for one open lot across a band of candidate rates.
///
/// `max_abs_pl` is the largest magnitude across the band - a scale anchor
/// for rendering proportional bars, not an analytic guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBand {
    #[serde(rename = "lotId")]
    pub lot_id: String,
    pub points: Vec<ScenarioPoint>,
    #[serde(rename = "maxAbsPL")]
    pub max_abs_pl: Decimal,
}
