use serde::Serialize;

use super::base::{recommend, CropCandidate};
use crate::climate::ClimateSummary;
use crate::market::{MarketRecord, MarketSnapshot};
use crate::report::profitability::ProfitEstimate;

pub const DEFAULT_TOP_N: usize = 5;

/// Record the persistence layer stores for each of a farm's top picks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRecommendation {
    pub crop_name: String,
    pub market_demand_score: f64,
    pub profitability_estimate: f64,
    pub cost_estimate: f64,
    pub ecological_impact: &'static str,
    pub rationale: String,
    pub ai_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketRecord>,
}

impl StoredRecommendation {
    pub fn from_candidate(candidate: CropCandidate) -> Self {
        let price = candidate
            .market_info
            .as_ref()
            .map(|m| m.latest_price)
            .unwrap_or(0.0);
        let demand = candidate
            .market_info
            .as_ref()
            .map(|m| m.demand_index)
            .unwrap_or(0.5);
        let estimate = ProfitEstimate::from_price(price);

        Self {
            ecological_impact: ecological_impact(&candidate.crop_name),
            crop_name: candidate.crop_name,
            market_demand_score: demand,
            profitability_estimate: estimate.profit,
            cost_estimate: estimate.cost,
            rationale: candidate.rationale,
            ai_score: candidate.score,
            market: candidate.market_info,
        }
    }
}

/// Run the base recommender and keep the first `top_n` picks.
pub fn stored_recommendations(
    soil: &str,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
    top_n: usize,
) -> Vec<StoredRecommendation> {
    recommend(soil, climate, market)
        .into_iter()
        .take(top_n)
        .map(StoredRecommendation::from_candidate)
        .collect()
}

pub fn ecological_impact(crop: &str) -> &'static str {
    match crop {
        "Wheat" => "Improves soil structure, nitrogen fixation, good for crop rotation",
        "Maize" => "High biomass production, good for soil organic matter, carbon sequestration",
        "Rice" => "Water management benefits, supports wetland ecosystem, high yield potential",
        "Millet" => "Drought resistant, low water requirement, excellent for arid regions",
        "Soybean" => "Nitrogen fixation, improves soil fertility, high protein content",
        "Chickpea" => "Nitrogen fixation, drought tolerant, improves soil health",
        "Lentil" => "Nitrogen fixation, soil improvement, short growing season",
        "Mustard" => "Oil crop, good for crop rotation, pest management benefits",
        "Cotton" => "Fiber crop, requires careful pest management, high value crop",
        _ => "Improves soil health and biodiversity",
    }
}
