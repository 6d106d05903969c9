use serde::Serialize;

use crate::climate::ClimateSummary;
use crate::market::snapshot::round2;
use crate::market::{MarketRecord, MarketSnapshot};
use crate::soil::base_soil_candidates;

const BASE_SCORE: f64 = 0.5;
const COOL_SEASON: [&str; 3] = ["Wheat", "Lentil", "Chickpea"];
const WARM_SEASON: [&str; 4] = ["Maize", "Rice", "Cotton", "Soybean"];
const DRY_TOLERANT: [&str; 3] = ["Millet", "Mustard", "Chickpea"];

/// One ranked crop from the base recommender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropCandidate {
    pub crop_name: String,
    /// In [0, 1], two decimals
    pub score: f64,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_info: Option<MarketRecord>,
}

/// Score every soil candidate with the climate and market bonuses that apply.
///
/// Each applied bonus appends its justification to the rationale, so the
/// rationale never mentions a signal that did not move the score.
pub fn recommend(
    soil: &str,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
) -> Vec<CropCandidate> {
    let climate = ClimateSummary::present(climate);

    let mut results: Vec<CropCandidate> = base_soil_candidates(soil)
        .iter()
        .map(|crop| score_candidate(crop, soil, climate, market))
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::debug!(soil, candidates = results.len(), "base recommendations scored");
    results
}

fn score_candidate(
    crop: &str,
    soil: &str,
    climate: Option<&ClimateSummary>,
    market: Option<&MarketSnapshot>,
) -> CropCandidate {
    let mut score = BASE_SCORE;
    let mut rationale = vec![format!("Suitable for {} soil", soil)];

    if let Some(climate) = climate {
        if let Some(temp) = climate.avg_temp_c {
            if COOL_SEASON.contains(&crop) && (10.0..=25.0).contains(&temp) {
                score += 0.2;
                rationale.push("Average temperature favors cool-season crops".to_string());
            }
            if WARM_SEASON.contains(&crop) && (20.0..=35.0).contains(&temp) {
                score += 0.2;
                rationale.push("Average temperature favors warm-season crops".to_string());
            }
        }
        if let Some(precip) = climate.avg_precip_mm {
            if crop == "Rice" && precip >= 3.0 {
                score += 0.15;
                rationale.push("Higher precipitation supports rice".to_string());
            }
            if DRY_TOLERANT.contains(&crop) && precip <= 2.0 {
                score += 0.1;
                rationale.push("Lower precipitation suits drought-tolerant crops".to_string());
            }
        }
    }

    let market_info = market.and_then(|m| m.get(crop)).cloned();
    if let Some(ref record) = market_info {
        score += 0.2 * record.demand_index.clamp(0.0, 1.0);
        rationale.push("Market demand trend is favorable".to_string());
    }

    CropCandidate {
        crop_name: crop.to_string(),
        score: round2(score.min(1.0)),
        rationale: rationale.join("; "),
        market_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate(temp: f64, precip: f64) -> ClimateSummary {
        ClimateSummary {
            avg_temp_c: Some(temp),
            avg_precip_mm: Some(precip),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_signals_scores_half() {
        let recs = recommend("Loam", None, None);
        let names: Vec<&str> = recs.iter().map(|r| r.crop_name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Maize", "Soybean", "Chickpea", "Vegetables"]);
        for rec in &recs {
            assert_eq!(rec.score, 0.5);
            assert_eq!(rec.rationale, "Suitable for Loam soil");
            assert!(rec.market_info.is_none());
        }
    }

    #[test]
    fn test_unknown_soil_has_no_candidates() {
        assert!(recommend("Volcanic", None, None).is_empty());
    }

    #[test]
    fn test_cool_season_bonus() {
        let recs = recommend("Silty", Some(&climate(18.0, 2.5)), None);
        // Wheat and Lentil get the cool-season bonus; Rice is outside the warm band
        assert_eq!(recs[0].crop_name, "Wheat");
        assert_eq!(recs[0].score, 0.7);
        assert_eq!(
            recs[0].rationale,
            "Suitable for Silty soil; Average temperature favors cool-season crops"
        );
        assert_eq!(recs[1].crop_name, "Lentil");
        assert_eq!(recs[2].crop_name, "Rice");
        assert_eq!(recs[2].score, 0.5);
    }

    #[test]
    fn test_rice_stacks_warm_and_wet_bonuses() {
        let recs = recommend("Clay", Some(&climate(28.0, 4.0)), None);
        assert_eq!(recs[0].crop_name, "Rice");
        assert_eq!(recs[0].score, 0.85);
        assert_eq!(
            recs[0].rationale,
            "Suitable for Clay soil; Average temperature favors warm-season crops; Higher precipitation supports rice"
        );
    }

    #[test]
    fn test_dry_bonus_and_market_bonus() {
        let market: MarketSnapshot = vec![("Millet", MarketRecord::new(1500.0, 0.75))]
            .into_iter()
            .collect();
        let recs = recommend("Sandy", Some(&climate(30.0, 1.0)), Some(&market));
        let millet = recs.iter().find(|r| r.crop_name == "Millet").unwrap();
        assert_eq!(millet.score, 0.75); // 0.5 + 0.1 + 0.2 * 0.75
        assert!(millet.rationale.ends_with("Market demand trend is favorable"));
        assert!(millet.market_info.is_some());
    }

    #[test]
    fn test_score_clamped_to_one() {
        let market: MarketSnapshot = vec![("Rice", MarketRecord::new(2500.0, 1.0))]
            .into_iter()
            .collect();
        let recs = recommend("Clay", Some(&climate(28.0, 4.0)), Some(&market));
        assert_eq!(recs[0].crop_name, "Rice");
        assert_eq!(recs[0].score, 1.0);
    }

    #[test]
    fn test_missing_fields_skip_bonuses() {
        let only_humidity = ClimateSummary {
            avg_rel_humidity: Some(70.0),
            ..Default::default()
        };
        let recs = recommend("Clay", Some(&only_humidity), None);
        assert!(recs.iter().all(|r| r.score == 0.5));
    }

    #[test]
    fn test_ties_keep_soil_order() {
        let recs = recommend("Chalky", Some(&climate(22.0, 2.5)), None);
        let names: Vec<&str> = recs.iter().map(|r| r.crop_name.as_str()).collect();
        assert_eq!(names, vec!["Barley", "Beet", "Oats"]);
    }
}
