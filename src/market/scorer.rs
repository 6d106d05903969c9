use serde::Serialize;

use super::snapshot::MarketSnapshot;

pub const MARKET_CONFIDENCE: f64 = 0.75;
pub const NO_MARKET_CONFIDENCE: f64 = 0.5;

const TOP_MARKET_PICKS: usize = 5;
const DEFAULT_MARKET_CROPS: [&str; 3] = ["Wheat", "Rice", "Maize"];

/// Market signal as fed into the consensus engine.
#[derive(Debug, Clone, Serialize)]
pub struct MarketAssessment {
    pub data_available: bool,
    /// Ranked best first
    pub recommendations: Vec<String>,
    pub confidence: f64,
    pub reasoning: String,
}

impl MarketAssessment {
    pub fn recommends(&self, crop: &str) -> bool {
        self.recommendations.iter().any(|c| c == crop)
    }
}

/// Rank crops by price x demand and keep the top five.
///
/// The sort is stable, so equal scores keep snapshot order.
pub fn assess_market(snapshot: Option<&MarketSnapshot>) -> MarketAssessment {
    let Some(snapshot) = MarketSnapshot::present(snapshot) else {
        return MarketAssessment {
            data_available: false,
            recommendations: DEFAULT_MARKET_CROPS.iter().map(|c| c.to_string()).collect(),
            confidence: NO_MARKET_CONFIDENCE,
            reasoning: "Using default recommendations due to unavailable market data".to_string(),
        };
    };

    let mut ranked: Vec<(&String, f64)> = snapshot
        .iter()
        .map(|(crop, record)| (crop, record.profit_score()))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    MarketAssessment {
        data_available: true,
        recommendations: ranked
            .into_iter()
            .take(TOP_MARKET_PICKS)
            .map(|(crop, _)| crop.clone())
            .collect(),
        confidence: MARKET_CONFIDENCE,
        reasoning: "Based on current market prices and demand trends - top profitable crops identified"
            .to_string(),
    }
}

pub fn market_recommendations(snapshot: Option<&MarketSnapshot>) -> Vec<String> {
    assess_market(snapshot).recommendations
}
