pub mod mc_engine;

pub use mc_engine::{
    mc_price_futures_call, monte_carlo_call_price, monte_carlo_call_price_chunked,
    SimulationConfig, SimulationResult,
};
