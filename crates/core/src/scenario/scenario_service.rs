//! Hypothetical-disposal projection over an offset band.

use rust_decimal::Decimal;

use super::scenario_model::{ScenarioBand, ScenarioPoint};
use crate::constants::SCENARIO_OFFSET_SPAN;
use crate::ledger::{LedgerError, Transaction};
use crate::Result;

/// The deployment's default band: whole-KRW offsets -5..+5 around the lot's
/// own rate, skipping 0.
pub fn default_offsets() -> Vec<i32> {
    (-SCENARIO_OFFSET_SPAN..=SCENARIO_OFFSET_SPAN)
        .filter(|offset| *offset != 0)
        .collect()
}

/// Projects the P/L of selling `lot` at `rate + offset` for every offset.
///
/// Uses the same per-currency rate normalization as realized P/L but applies
/// no transfer fee: the question answered is "what if I sold this lot at
/// this rate", independent of any fee path. The lot must be a buy; the
/// caller is responsible for handing in one that is still open.
pub fn simulate(lot: &Transaction, offsets: &[i32]) -> Result<ScenarioBand> {
    if !lot.kind.is_buy() {
        return Err(LedgerError::NotAnOpenLot {
            id: lot.id.clone(),
        }
        .into());
    }
    lot.validate()?;

    let policy = lot.currency.policy();
    let cost = policy.gross_value(lot.foreign_amount, lot.rate);

    let mut points = Vec::with_capacity(offsets.len());
    let mut max_abs_pl = Decimal::ZERO;
    for &offset in offsets {
        if offset == 0 {
            continue;
        }
        let rate = lot.rate + Decimal::from(offset);
        let pl = policy.gross_value(lot.foreign_amount, rate) - cost;
        if pl.abs() > max_abs_pl {
            max_abs_pl = pl.abs();
        }
        points.push(ScenarioPoint { rate, pl });
    }

    Ok(ScenarioBand {
        lot_id: lot.id.clone(),
        points,
        max_abs_pl,
    })
}

/// [`simulate`] over the default offset band.
pub fn simulate_default(lot: &Transaction) -> Result<ScenarioBand> {
    simulate(lot, &default_offsets())
}
