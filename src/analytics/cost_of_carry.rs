// src/analytics/cost_of_carry.rs
//! Theoretical futures price from the cost-of-carry relation
//!
//! ```text
//! F = S * exp((r + d - y) * T)
//! ```
//!
//! where `r` finances the position, `d` is the storage cost and `y` the
//! convenience yield, all continuously compounded.

use crate::error::{validation::*, PricingResult};
use crate::models::MarketParameters;

/// Fair futures price for a spot and a set of carry rates.
///
/// `t = 0` returns the spot itself. Rates may take either sign.
///
/// # Errors
/// `InvalidInput` when `spot <= 0`, `t < 0`, or any input is non-finite.
pub fn cost_of_carry_price(spot: f64, r: f64, d: f64, y: f64, t: f64) -> PricingResult<f64> {
    validate_positive("spot", spot)?;
    validate_finite("rate", r)?;
    validate_finite("storage_cost", d)?;
    validate_finite("convenience_yield", y)?;
    validate_non_negative("maturity", t)?;

    let forward = spot * ((r + d - y) * t).exp();
    tracing::debug!(spot, r, d, y, t, forward, "cost-of-carry futures price");
    Ok(forward)
}

/// Futures price for a scenario; only the spot and carry fields are read.
pub fn futures_price(params: &MarketParameters) -> PricingResult<f64> {
    cost_of_carry_price(
        params.spot,
        params.rate,
        params.storage_cost,
        params.convenience_yield,
        params.maturity,
    )
}
