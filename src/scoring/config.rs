use serde::{Deserialize, Serialize};

/// Point values for the consensus score.
///
/// Each weight is optional; unset weights use the built-in defaults, which
/// reproduce the standard ranking.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   soil_excellent: 4
///   soil_good: 3
///   climate: 3
///   market: 3
///   price_trend: 1
///   profitability: 1
///   seasonal: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConsensusWeights {
    /// Awarded when the crop is in the soil's excellent tier (default: 4)
    #[serde(default)]
    pub soil_excellent: Option<i32>,

    /// Awarded when the crop is in the soil's good tier (default: 3)
    #[serde(default)]
    pub soil_good: Option<i32>,

    /// Awarded when the climate classifier picks the crop (default: 3)
    #[serde(default)]
    pub climate: Option<i32>,

    /// Awarded when the market scorer picks the crop (default: 3)
    #[serde(default)]
    pub market: Option<i32>,

    /// Added for rising prices, subtracted for falling prices (default: 1)
    #[serde(default)]
    pub price_trend: Option<i32>,

    /// Added for high profitability, subtracted for low (default: 1)
    #[serde(default)]
    pub profitability: Option<i32>,

    /// Added when the current month is a planting month for the crop (default: 1)
    #[serde(default)]
    pub seasonal: Option<i32>,
}

pub const DEFAULT_SOIL_EXCELLENT: i32 = 4;
pub const DEFAULT_SOIL_GOOD: i32 = 3;
pub const DEFAULT_CLIMATE: i32 = 3;
pub const DEFAULT_MARKET: i32 = 3;
pub const DEFAULT_PRICE_TREND: i32 = 1;
pub const DEFAULT_PROFITABILITY: i32 = 1;
pub const DEFAULT_SEASONAL: i32 = 1;

impl Default for ConsensusWeights {
    fn default() -> Self {
        Self {
            soil_excellent: Some(DEFAULT_SOIL_EXCELLENT),
            soil_good: Some(DEFAULT_SOIL_GOOD),
            climate: Some(DEFAULT_CLIMATE),
            market: Some(DEFAULT_MARKET),
            price_trend: Some(DEFAULT_PRICE_TREND),
            profitability: Some(DEFAULT_PROFITABILITY),
            seasonal: Some(DEFAULT_SEASONAL),
        }
    }
}

impl ConsensusWeights {
    pub fn soil_excellent(&self) -> i32 {
        self.soil_excellent.unwrap_or(DEFAULT_SOIL_EXCELLENT)
    }

    pub fn soil_good(&self) -> i32 {
        self.soil_good.unwrap_or(DEFAULT_SOIL_GOOD)
    }

    pub fn climate(&self) -> i32 {
        self.climate.unwrap_or(DEFAULT_CLIMATE)
    }

    pub fn market(&self) -> i32 {
        self.market.unwrap_or(DEFAULT_MARKET)
    }

    pub fn price_trend(&self) -> i32 {
        self.price_trend.unwrap_or(DEFAULT_PRICE_TREND)
    }

    pub fn profitability(&self) -> i32 {
        self.profitability.unwrap_or(DEFAULT_PROFITABILITY)
    }

    pub fn seasonal(&self) -> i32 {
        self.seasonal.unwrap_or(DEFAULT_SEASONAL)
    }
}
