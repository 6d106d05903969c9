pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::ConsensusWeights;
pub use engine::{consensus, CropScore, FactorContribution, ScoreDetails, MAX_CONSENSUS_CROPS};
pub use factors::{ClimateFit, PriceTrend, Profitability, SeasonalTiming};
pub use validation::{validate_weights, MAX_WEIGHT};
