// src/config.rs
//! Environment-driven configuration for the demo and benchmark programs.
//!
//! The library itself takes plain structs; this module only maps `.env` /
//! process variables onto them. Unset variables fall back to the reference
//! scenario (spot 1.20, strike 1.25, six months) with 100,000 samples and
//! seed 42.

use crate::error::{PricingError, PricingResult};
use crate::mc::mc_engine::{SimulationConfig, DEFAULT_SAMPLES};
use crate::models::MarketParameters;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub market: MarketParameters,
    pub simulation: SimulationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            market: MarketParameters::new(1.20, 0.02, 0.01, 0.0, 0.5, 1.25, 0.25),
            simulation: SimulationConfig {
                num_samples: DEFAULT_SAMPLES,
                seed: Some(42),
                ..Default::default()
            },
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> PricingResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> PricingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let m = defaults.market;
        let s = defaults.simulation;

        let market = MarketParameters {
            spot: parse_or(&lookup, "FUTURES_SPOT", m.spot)?,
            rate: parse_or(&lookup, "FUTURES_RATE", m.rate)?,
            storage_cost: parse_or(&lookup, "FUTURES_STORAGE_COST", m.storage_cost)?,
            convenience_yield: parse_or(&lookup, "FUTURES_CONVENIENCE_YIELD", m.convenience_yield)?,
            maturity: parse_or(&lookup, "FUTURES_MATURITY", m.maturity)?,
            strike: parse_or(&lookup, "FUTURES_STRIKE", m.strike)?,
            volatility: parse_or(&lookup, "FUTURES_VOLATILITY", m.volatility)?,
        };

        let seed = match lookup("MC_SEED") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("none") => None,
            Some(raw) => Some(parse_value::<u64>("MC_SEED", &raw)?),
            None => s.seed,
        };

        let simulation = SimulationConfig {
            num_samples: parse_or(&lookup, "MC_SAMPLES", s.num_samples)?,
            seed,
            use_antithetic: parse_or(&lookup, "MC_ANTITHETIC", s.use_antithetic)?,
            parallel: parse_or(&lookup, "MC_PARALLEL", s.parallel)?,
        };

        Ok(AppConfig { market, simulation })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> PricingResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| PricingError::Config(format!("{key}: {e}")))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> PricingResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
