use serde::Serialize;
use std::collections::BTreeSet;

use super::config::ConsensusWeights;
use super::factors::{ClimateFit, PriceTrend, Profitability, SeasonalTiming};
use crate::calendar::planting_crops_for_month;
use crate::climate::ClimateAssessment;
use crate::market::{MarketAssessment, MarketSnapshot};
use crate::soil::SoilAssessment;

pub const MAX_CONSENSUS_CROPS: usize = 8;

/// Confidence accumulated from the three signals is always divided by three,
/// even when fewer signals matched.
const CONFIDENCE_DIVISOR: f64 = 3.0;
const GOOD_TIER_CONFIDENCE: f64 = 0.7;
const FALLBACK_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Soil", "Price trend"
    pub description: String, // e.g. "excellent tier for Loam soil"
    pub before: i32,         // Score before this factor
    pub after: i32,          // Score after this factor
}

/// Per-signal breakdown kept for the report generators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDetails {
    pub soil_score: i32,
    pub climate_score: i32,
    pub market_score: i32,
    pub price_trend: PriceTrend,
    pub profitability: Profitability,
    pub climate_suitability: ClimateFit,
    pub seasonal_timing: SeasonalTiming,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropScore {
    pub crop_name: String,
    pub score: i32,
    /// In (0, 1]
    pub confidence: f64,
    pub details: ScoreDetails,
    pub soil_suitability: bool,
    pub climate_suitability: bool,
    pub market_suitability: bool,
    pub factors: Vec<FactorContribution>,
}

impl CropScore {
    /// Human-readable summary built only from factors that moved the score.
    pub fn rationale(&self) -> String {
        if self.factors.is_empty() {
            return "No signal changed the score for this crop".to_string();
        }
        self.factors
            .iter()
            .map(|f| format!("{}: {}", f.label, f.description))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Merge the soil, climate and market signals into ranked crop scores.
///
/// Candidates are the soil-excellent crops plus every crop the climate and
/// market signals recommend. Returns at most eight entries sorted by score,
/// then confidence, descending; remaining ties fall back to crop name order.
pub fn consensus(
    soil: &SoilAssessment,
    climate: &ClimateAssessment,
    market: &MarketAssessment,
    snapshot: Option<&MarketSnapshot>,
    month: u32,
    weights: &ConsensusWeights,
) -> Vec<CropScore> {
    let mut candidates: BTreeSet<&str> = BTreeSet::new();
    candidates.extend(soil.recommendations.excellent.iter().copied());
    candidates.extend(climate.recommendations.iter().map(String::as_str));
    candidates.extend(market.recommendations.iter().map(String::as_str));

    let snapshot = MarketSnapshot::present(snapshot);
    let seasonal = planting_crops_for_month(month);

    let mut scores: Vec<CropScore> = candidates
        .into_iter()
        .map(|crop| score_crop(crop, soil, climate, market, snapshot, seasonal, weights))
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
    });
    scores.truncate(MAX_CONSENSUS_CROPS);

    for s in &scores {
        tracing::trace!(crop = %s.crop_name, score = s.score, confidence = s.confidence, "consensus");
    }
    scores
}

fn score_crop(
    crop: &str,
    soil: &SoilAssessment,
    climate: &ClimateAssessment,
    market: &MarketAssessment,
    snapshot: Option<&MarketSnapshot>,
    seasonal: &[&str],
    weights: &ConsensusWeights,
) -> CropScore {
    let mut score = 0;
    let mut confidence = 0.0;
    let mut factors = Vec::new();
    let mut details = ScoreDetails {
        soil_score: 0,
        climate_score: 0,
        market_score: 0,
        price_trend: PriceTrend::Stable,
        profitability: Profitability::Medium,
        climate_suitability: ClimateFit::Moderate,
        seasonal_timing: SeasonalTiming::Optimal,
    };

    let mut apply = |score: &mut i32, points: i32, label: &str, description: String| {
        let before = *score;
        *score = score.saturating_add(points);
        factors.push(FactorContribution {
            label: label.to_string(),
            description,
            before,
            after: *score,
        });
    };

    let tiers = &soil.recommendations;
    let soil_excellent = tiers.is_excellent(crop);
    let soil_good = !soil_excellent && tiers.is_good(crop);
    if soil_excellent {
        details.soil_score = weights.soil_excellent();
        confidence += soil.confidence;
        apply(
            &mut score,
            details.soil_score,
            "Soil",
            format!("excellent match for {}", soil.tier_source()),
        );
    } else if soil_good {
        details.soil_score = weights.soil_good();
        confidence += soil.confidence * GOOD_TIER_CONFIDENCE;
        apply(
            &mut score,
            details.soil_score,
            "Soil",
            format!("good match for {}", soil.tier_source()),
        );
    }

    let climate_pick = climate.recommends(crop);
    if climate_pick {
        details.climate_score = weights.climate();
        details.climate_suitability = ClimateFit::Excellent;
        confidence += climate.confidence;
        let description = if climate.summary.is_some() {
            "suited to local temperature and rainfall"
        } else {
            "default pick while climate data is unavailable"
        };
        apply(&mut score, details.climate_score, "Climate", description.to_string());
    }

    let market_pick = market.recommends(crop);
    if market_pick {
        details.market_score = weights.market();
        confidence += market.confidence;
        let description = if market.data_available {
            "among the most profitable crops by price and demand"
        } else {
            "default pick while market data is unavailable"
        };
        apply(&mut score, details.market_score, "Market", description.to_string());
    }

    if let Some(record) = snapshot.and_then(|s| s.get(crop)) {
        details.price_trend = PriceTrend::from_change_pct(record.price_change_pct);
        let sign = details.price_trend.sign();
        if sign != 0 {
            apply(
                &mut score,
                sign * weights.price_trend(),
                "Price trend",
                format!("{} prices ({:+.1}%)", details.price_trend, record.price_change_pct),
            );
        }

        details.profitability = Profitability::classify(record.latest_price, record.demand_index);
        let sign = details.profitability.sign();
        if sign != 0 {
            apply(
                &mut score,
                sign * weights.profitability(),
                "Profitability",
                format!(
                    "{} (price {:.0}, demand {:.2})",
                    details.profitability, record.latest_price, record.demand_index
                ),
            );
        }
    }

    if seasonal.contains(&crop) {
        details.seasonal_timing = SeasonalTiming::Optimal;
        apply(
            &mut score,
            weights.seasonal(),
            "Season",
            "planting window is open this month".to_string(),
        );
    }

    CropScore {
        crop_name: crop.to_string(),
        score,
        confidence: if confidence > 0.0 {
            confidence / CONFIDENCE_DIVISOR
        } else {
            FALLBACK_CONFIDENCE
        },
        details,
        soil_suitability: soil_excellent || soil_good,
        climate_suitability: climate_pick,
        market_suitability: market_pick,
        factors,
    }
}
