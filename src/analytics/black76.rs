// src/analytics/black76.rs
//! Closed-form valuation of a European call on a futures contract
//!
//! # Mathematical Foundation
//!
//! Under the futures measure the futures price is a driftless lognormal
//! martingale, which gives Black's (1976) formula:
//! ```text
//! C = e^(-rT) * (F*Φ(d₁) - X*Φ(d₂))
//! d₁ = [ln(F/X) + σ²T/2] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! Φ(d₂) is the probability, under the futures measure, that the call
//! finishes in the money; its sign drives the [`ExerciseOutlook`].

use crate::analytics::cost_of_carry::futures_price;
use crate::error::{validation::*, PricingResult};
use crate::math_utils::norm_cdf;
use crate::models::MarketParameters;
use std::fmt;

/// Two-way reading of a priced call, decided by the sign of d₂.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseOutlook {
    /// d₂ < 0, or d₂ undefined (NaN from an overflowed input)
    LikelyOutOfMoney,
    /// d₂ ≥ 0
    LikelyInMoney,
}

impl ExerciseOutlook {
    pub fn classify(d2: f64) -> Self {
        if d2 >= 0.0 {
            ExerciseOutlook::LikelyInMoney
        } else {
            ExerciseOutlook::LikelyOutOfMoney
        }
    }

    /// Human-readable interpretation embedding the strike and d₂ to 2dp.
    pub fn message(&self, strike: f64, d2: f64) -> String {
        match self {
            ExerciseOutlook::LikelyOutOfMoney => format!(
                "The futures price is below the strike price of {}. With d2 = {:.2}, \
                 the option is cheap and less likely to end in profit; it is unlikely \
                 to be exercised.",
                strike, d2
            ),
            ExerciseOutlook::LikelyInMoney => format!(
                "The futures price is above the strike price of {}. With d2 = {:.2}, \
                 the option is valuable and more likely to end in profit; it is likely \
                 to be exercised.",
                strike, d2
            ),
        }
    }
}

/// Outcome of the closed-form pricer
#[derive(Clone, Debug, PartialEq)]
pub struct OptionPricingResult {
    pub futures_price: f64,
    pub d1: f64,
    pub d2: f64,
    pub call_price: f64,
    pub outlook: ExerciseOutlook,
    pub interpretation: String,
}

impl fmt::Display for OptionPricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Futures price (F): {:.4}", self.futures_price)?;
        writeln!(f, "d1: {:.4}", self.d1)?;
        writeln!(f, "d2: {:.4}", self.d2)?;
        writeln!(f, "Call price: {:.4}", self.call_price)?;
        write!(f, "{}", self.interpretation)
    }
}

/// d₁ and d₂ for a futures option.
///
/// Callers must have validated `forward`, `strike`, `sigma` and `t` as
/// strictly positive.
///
/// d₁ is written as `ln(F/X)/(σ√T) + σ√T/2` so σ²T is never formed: at huge
/// volatility d₁ → +∞ and d₂ → −∞ instead of both overflowing to +∞.
pub fn black76_d1_d2(forward: f64, strike: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = (forward / strike).ln() / sig_sqrt_t + 0.5 * sig_sqrt_t;
    let d2 = d1 - sig_sqrt_t;
    (d1, d2)
}

/// Black-76 call on a given futures price.
///
/// Only the rate, maturity, strike and volatility of `params` are read; the
/// spot and carry fields are already folded into `forward`.
///
/// # Errors
/// `InvalidInput` when `forward` is NaN or not positive, when `strike`,
/// `volatility` or `maturity` is not finite and strictly positive, or when
/// `rate` is non-finite. Checked before any arithmetic. A `forward` that
/// overflowed to `+inf` is priced and yields a non-finite call.
pub fn black76_call(params: &MarketParameters, forward: f64) -> PricingResult<OptionPricingResult> {
    validate_positive_or_overflow("futures_price", forward)?;
    validate_positive("strike", params.strike)?;
    validate_positive("volatility", params.volatility)?;
    validate_positive("maturity", params.maturity)?;
    validate_finite("rate", params.rate)?;

    let strike = params.strike;
    let (d1, d2) = black76_d1_d2(forward, strike, params.volatility, params.maturity);
    let discount = params.discount_factor();
    let call_price = discount * (forward * norm_cdf(d1) - strike * norm_cdf(d2));

    if !call_price.is_finite() {
        tracing::warn!(forward, strike, d1, d2, call_price, "non-finite Black-76 call price");
    }

    let outlook = ExerciseOutlook::classify(d2);
    let interpretation = outlook.message(strike, d2);
    tracing::debug!(forward, strike, d1, d2, call_price, ?outlook, "Black-76 call priced");

    Ok(OptionPricingResult {
        futures_price: forward,
        d1,
        d2,
        call_price,
        outlook,
        interpretation,
    })
}

/// Cost-of-carry futures price followed by the Black-76 call.
pub fn price_futures_call(params: &MarketParameters) -> PricingResult<OptionPricingResult> {
    params.validate()?;
    let forward = futures_price(params)?;
    black76_call(params, forward)
}
