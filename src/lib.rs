//! # futures-carry: Futures Pricing and Futures-Option Valuation
//!
//! Computes a theoretical futures price from the cost-of-carry relation and
//! values a European call on that futures contract two ways: Black's (1976)
//! closed form and a Monte Carlo simulation of the futures price under the
//! futures measure.
//!
//! ## Key Features
//!
//! - **Cost of carry**: `F = S·exp((r + d − y)·T)` with storage cost and convenience yield
//! - **Closed form**: Black-76 call price, d₁/d₂, and an exercise-outlook interpretation
//! - **Monte Carlo**: seeded, chunked, Rayon-parallel estimator with standard error
//!   and optional antithetic variates; bit-identical across thread counts
//! - **Validation**: every precondition is checked up front and reported as
//!   [`PricingError::InvalidInput`]
//!
//! ## Quick Start
//!
//! ```rust
//! use futures_carry::analytics::price_futures_call;
//! use futures_carry::mc::{mc_price_futures_call, SimulationConfig};
//! use futures_carry::models::MarketParameters;
//!
//! let params = MarketParameters::new(1.20, 0.02, 0.01, 0.0, 0.5, 1.25, 0.25);
//!
//! let analytic = price_futures_call(&params).expect("valid scenario");
//! println!("{}", analytic.interpretation);
//!
//! let cfg = SimulationConfig { seed: Some(42), ..Default::default() };
//! let mc = mc_price_futures_call(&params, &cfg).expect("valid scenario");
//! assert!((mc.price - analytic.call_price).abs() < 0.005);
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events (`debug` for computed prices, `warn`
//! for non-finite results) and never installs a subscriber.

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod rng;

pub use analytics::{price_futures_call, ExerciseOutlook, OptionPricingResult};
pub use error::{PricingError, PricingResult};
pub use mc::{monte_carlo_call_price, SimulationConfig, SimulationResult};
pub use models::MarketParameters;
