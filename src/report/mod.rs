pub mod climate_fit;
pub mod price;
pub mod profitability;
pub mod risk;
pub mod seasonal;
pub mod success;
pub mod timeline;

pub use climate_fit::climate_fit_notes;
pub use price::price_notes;
pub use profitability::{profitability_analysis, ProfitEstimate, ProfitabilityAnalysis};
pub use risk::{risk_assessment, RiskAssessment, RiskLevel};
pub use seasonal::{seasonal_window, SeasonalWindow};
pub use success::success_factors;
pub use timeline::{ImplementationTimeline, IMPLEMENTATION_TIMELINE};

use serde::Serialize;

use crate::climate::ClimateSummary;
use crate::market::MarketSnapshot;
use crate::scoring::{CropScore, ScoreDetails};

/// Full narrative for one consensus pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropReport {
    pub crop_name: String,
    pub overall_score: i32,
    pub confidence: f64,
    pub details: ScoreDetails,
    pub rationale: String,
    pub climate_recommendations: Vec<String>,
    pub price_recommendations: Vec<String>,
    pub seasonal_recommendations: SeasonalWindow,
    pub profitability_analysis: ProfitabilityAnalysis,
    pub risk_assessment: RiskAssessment,
    pub implementation_timeline: ImplementationTimeline,
    pub success_factors: Vec<&'static str>,
}

pub fn build_report(
    score: &CropScore,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
    soil: &str,
    month: u32,
) -> CropReport {
    let crop = score.crop_name.as_str();
    let record = market.and_then(|m| m.get(crop));

    CropReport {
        crop_name: score.crop_name.clone(),
        overall_score: score.score,
        confidence: score.confidence,
        details: score.details.clone(),
        rationale: score.rationale(),
        climate_recommendations: climate_fit_notes(crop, climate),
        price_recommendations: price_notes(record),
        seasonal_recommendations: seasonal_window(crop, month),
        profitability_analysis: profitability_analysis(record),
        risk_assessment: risk_assessment(crop, climate, record),
        implementation_timeline: IMPLEMENTATION_TIMELINE,
        success_factors: success_factors(crop, soil),
    }
}

/// One report per consensus pick, in ranking order.
pub fn comprehensive_recommendations(
    scores: &[CropScore],
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
    soil: &str,
    month: u32,
) -> Vec<CropReport> {
    scores
        .iter()
        .map(|s| build_report(s, climate, market, soil, month))
        .collect()
}
