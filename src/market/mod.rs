pub mod scorer;
pub mod snapshot;

pub use scorer::{assess_market, market_recommendations, MarketAssessment};
pub use snapshot::{
    MarketInsights, MarketRecord, MarketSnapshot, PricePoint, SeasonalityTag, TrendTag,
    VolatilityTag,
};
