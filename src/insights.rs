use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::season_for_month;
use crate::climate::{
    analyze_weather, assess_climate, climate_suitable_crops, climate_zone, ClimateAssessment,
    ClimateSummary, ClimateZone, WeatherAnalysis,
};
use crate::market::{assess_market, MarketAssessment, MarketSnapshot};
use crate::report::{comprehensive_recommendations, CropReport, ProfitEstimate};
use crate::scoring::{consensus, ConsensusWeights, CropScore};
use crate::soil::{assess_soil, farm_soil_crops, SoilAssessment};

/// Everything the insights dashboard shows for one farm.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusInsights {
    pub consensus_crops: Vec<CropScore>,
    pub comprehensive_recommendations: Vec<CropReport>,
    pub weather_analysis: WeatherAnalysis,
    pub soil_analysis: SoilAssessment,
    pub climate_analysis: ClimateAssessment,
    pub market_analysis: MarketAssessment,
}

/// Run the three signal scorers, merge them, and report on every pick.
pub fn consensus_insights(
    soil: &str,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
    month: u32,
    weights: &ConsensusWeights,
) -> ConsensusInsights {
    let soil_analysis = assess_soil(soil);
    let climate_analysis = assess_climate(climate);
    let market_analysis = assess_market(market);
    let weather_analysis = analyze_weather(climate);

    let consensus_crops = consensus(
        &soil_analysis,
        &climate_analysis,
        &market_analysis,
        market,
        month,
        weights,
    );
    let comprehensive_recommendations =
        comprehensive_recommendations(&consensus_crops, climate, market, soil, month);

    ConsensusInsights {
        consensus_crops,
        comprehensive_recommendations,
        weather_analysis,
        soil_analysis,
        climate_analysis,
        market_analysis,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOpportunity {
    pub crop: String,
    pub price: f64,
    pub demand: f64,
    pub trend: f64,
    /// demand x price / 1000
    pub opportunity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalOutlook {
    pub current_season: &'static str,
    /// Season headline crops that are also optimal for this farm
    pub recommended_crops: Vec<&'static str>,
    pub all_seasonal_crops: &'static [&'static str],
}

/// Farm-specific market analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmMarketInsights {
    pub climate_zone: ClimateZone,
    pub optimal_crops: Vec<&'static str>,
    pub market_opportunities: Vec<MarketOpportunity>,
    pub risk_factors: Vec<&'static str>,
    pub profitability_analysis: BTreeMap<String, ProfitEstimate>,
    pub seasonal_recommendations: SeasonalOutlook,
}

const PROFITABILITY_CROPS: usize = 5;

pub fn farm_market_insights(
    soil: &str,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
    month: u32,
) -> FarmMarketInsights {
    let climate_crops: BTreeSet<String> = climate_suitable_crops(climate);
    let optimal_crops: Vec<&'static str> = farm_soil_crops(soil)
        .iter()
        .copied()
        .filter(|c| climate_crops.contains(*c))
        .collect();

    let mut market_opportunities: Vec<MarketOpportunity> = optimal_crops
        .iter()
        .filter_map(|crop| {
            let record = market?.get(crop)?;
            Some(MarketOpportunity {
                crop: crop.to_string(),
                price: record.latest_price,
                demand: record.demand_index,
                trend: record.price_change_pct,
                opportunity_score: record.demand_index * record.latest_price / 1000.0,
            })
        })
        .collect();
    market_opportunities.sort_by(|a, b| b.opportunity_score.total_cmp(&a.opportunity_score));

    let profitability_analysis = optimal_crops
        .iter()
        .take(PROFITABILITY_CROPS)
        .filter_map(|crop| {
            let record = market?.get(crop)?;
            Some((crop.to_string(), ProfitEstimate::from_price(record.latest_price)))
        })
        .collect();

    let season = season_for_month(month);
    let seasonal_recommendations = SeasonalOutlook {
        current_season: season.season,
        recommended_crops: season
            .recommended
            .iter()
            .copied()
            .filter(|c| optimal_crops.contains(c))
            .collect(),
        all_seasonal_crops: season.recommended,
    };

    FarmMarketInsights {
        climate_zone: climate_zone(climate),
        risk_factors: climate_risk_factors(climate),
        optimal_crops,
        market_opportunities,
        profitability_analysis,
        seasonal_recommendations,
    }
}

fn climate_risk_factors(climate: Option<&ClimateSummary>) -> Vec<&'static str> {
    let Some(climate) = ClimateSummary::present(climate) else {
        return Vec::new();
    };
    let temp = climate.temperature();
    let rainfall = climate.rainfall();
    let mut risks = Vec::new();
    if temp > 35.0 {
        risks.push("High temperature risk - consider heat-tolerant crops");
    }
    if temp < 10.0 {
        risks.push("Low temperature risk - consider cold-tolerant crops");
    }
    if rainfall < 500.0 {
        risks.push("Low rainfall risk - ensure irrigation capacity");
    }
    if rainfall > 2000.0 {
        risks.push("High rainfall risk - ensure drainage systems");
    }
    risks
}
