pub mod gbm;
pub mod market;

pub use gbm::ForwardGbm;
pub use market::MarketParameters;
