// src/error.rs

/// Errors raised by the futures-carry pricers.
///
/// Every pricing precondition is checked before any arithmetic runs, so an
/// `InvalidInput` always means the caller supplied an out-of-domain value.
/// Numeric overflow inside a valid computation is not an error: it surfaces
/// as an IEEE special value in the result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Non-positive price, volatility, maturity or sample count, or a
    /// non-finite market input
    #[error("Invalid input '{parameter}' = {value}: {constraint}")]
    InvalidInput {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Environment configuration could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for futures-carry operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    fn invalid(name: &str, value: f64, constraint: &str) -> PricingError {
        PricingError::InvalidInput {
            parameter: name.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }

    /// Validate that a parameter is finite and strictly positive.
    ///
    /// NaN fails the check.
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(invalid(name, value, "must be finite and positive (> 0)"))
        }
    }

    /// Validate a derived price that must be positive but may have
    /// overflowed to `+inf`. NaN and non-positive values fail.
    pub fn validate_positive_or_overflow(name: &str, value: f64) -> PricingResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(invalid(name, value, "must be positive (> 0)"))
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(invalid(name, value, "must be finite and non-negative (≥ 0)"))
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(invalid(name, value, "must be finite (not NaN or infinite)"))
        }
    }

    /// Validate a Monte Carlo sample count
    pub fn validate_samples(num_samples: usize) -> PricingResult<()> {
        if num_samples == 0 {
            Err(invalid(
                "num_samples",
                num_samples as f64,
                "must be greater than 0",
            ))
        } else {
            Ok(())
        }
    }
}
