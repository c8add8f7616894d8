pub mod black76;
pub mod cost_of_carry;

pub use black76::{price_futures_call, ExerciseOutlook, OptionPricingResult};
pub use cost_of_carry::{cost_of_carry_price, futures_price};
