// src/models/market.rs
//! Market inputs for a single futures-option scenario.

use crate::error::{validation::*, PricingResult};

/// Spot, carry and option terms for one scenario.
///
/// Plain immutable record: each pricer validates the fields it consumes, so
/// a carry-only scenario (no option terms yet) can still be priced with
/// [`crate::analytics::cost_of_carry::futures_price`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketParameters {
    pub spot: f64,              // S, spot price of the underlying
    pub rate: f64,              // r, continuously compounded risk-free rate
    pub storage_cost: f64,      // d, storage cost as a continuous yield
    pub convenience_yield: f64, // y, convenience yield
    pub maturity: f64,          // T, years to expiry
    pub strike: f64,            // X
    pub volatility: f64,        // sigma, lognormal volatility of the futures price
}

impl MarketParameters {
    pub fn new(
        spot: f64,
        rate: f64,
        storage_cost: f64,
        convenience_yield: f64,
        maturity: f64,
        strike: f64,
        volatility: f64,
    ) -> Self {
        MarketParameters {
            spot,
            rate,
            storage_cost,
            convenience_yield,
            maturity,
            strike,
            volatility,
        }
    }

    /// Net carry rate `r + d - y`.
    pub fn carry_rate(&self) -> f64 {
        self.rate + self.storage_cost - self.convenience_yield
    }

    /// Discount factor `exp(-r T)` for the option payoff.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Check the preconditions for carry-only pricing.
    pub fn validate_carry(&self) -> PricingResult<()> {
        validate_positive("spot", self.spot)?;
        validate_finite("rate", self.rate)?;
        validate_finite("storage_cost", self.storage_cost)?;
        validate_finite("convenience_yield", self.convenience_yield)?;
        validate_non_negative("maturity", self.maturity)?;
        Ok(())
    }

    /// Check the full set of preconditions for option pricing
    pub fn validate(&self) -> PricingResult<()> {
        self.validate_carry()?;
        validate_positive("maturity", self.maturity)?;
        validate_positive("strike", self.strike)?;
        validate_positive("volatility", self.volatility)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn scenario() -> MarketParameters {
        MarketParameters::new(1.20, 0.02, 0.01, 0.0, 0.5, 1.25, 0.25)
    }

    #[test]
    fn test_carry_rate_and_discount() {
        let p = scenario();
        assert!((p.carry_rate() - 0.03).abs() < 1e-15);
        assert_eq!(p.discount_factor(), (-0.02f64 * 0.5).exp());
    }

    #[test]
    fn test_validate_accepts_reference_scenario() {
        assert!(scenario().validate().is_ok());
    }

    #[test]
    fn test_zero_maturity_is_carry_valid_but_not_option_valid() {
        let p = MarketParameters { maturity: 0.0, ..scenario() };
        assert!(p.validate_carry().is_ok());
        assert!(matches!(
            p.validate(),
            Err(PricingError::InvalidInput { ref parameter, .. }) if parameter == "maturity"
        ));
    }

    #[test]
    fn test_validate_rejects_each_bad_field() {
        let cases = [
            ("spot", MarketParameters { spot: 0.0, ..scenario() }),
            ("rate", MarketParameters { rate: f64::NAN, ..scenario() }),
            ("storage_cost", MarketParameters { storage_cost: f64::INFINITY, ..scenario() }),
            ("maturity", MarketParameters { maturity: -0.5, ..scenario() }),
            ("strike", MarketParameters { strike: -1.0, ..scenario() }),
            ("volatility", MarketParameters { volatility: 0.0, ..scenario() }),
        ];
        for (name, params) in cases {
            match params.validate() {
                Err(PricingError::InvalidInput { parameter, .. }) => assert_eq!(parameter, name),
                other => panic!("{name}: expected InvalidInput, got {:?}", other),
            }
        }
    }
}
