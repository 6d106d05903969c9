use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::summary::ClimateSummary;

pub const CLIMATE_CONFIDENCE: f64 = 0.8;
pub const NO_CLIMATE_CONFIDENCE: f64 = 0.5;

const DEFAULT_CLIMATE_CROPS: [&str; 3] = ["Wheat", "Maize", "Rice"];

/// Coarse climate label derived from temperature and rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    HotAndDry,
    HotAndHumid,
    ColdAndDry,
    CoolAndWet,
    Temperate,
    Unknown,
}

impl ClimateZone {
    pub fn label(&self) -> &'static str {
        match self {
            ClimateZone::HotAndDry => "Hot and Dry",
            ClimateZone::HotAndHumid => "Hot and Humid",
            ClimateZone::ColdAndDry => "Cold and Dry",
            ClimateZone::CoolAndWet => "Cool and Wet",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ClimateZone {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a summary into a zone. First matching bucket wins.
pub fn climate_zone(summary: Option<&ClimateSummary>) -> ClimateZone {
    let Some(summary) = ClimateSummary::present(summary) else {
        return ClimateZone::Unknown;
    };
    let temp = summary.temperature();
    let rainfall = summary.rainfall();

    if temp > 30.0 && rainfall < 500.0 {
        ClimateZone::HotAndDry
    } else if temp > 25.0 && rainfall > 1500.0 {
        ClimateZone::HotAndHumid
    } else if temp < 15.0 && rainfall < 500.0 {
        ClimateZone::ColdAndDry
    } else if temp < 20.0 && rainfall > 1000.0 {
        ClimateZone::CoolAndWet
    } else {
        ClimateZone::Temperate
    }
}

/// Climate signal as fed into the consensus engine.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateAssessment {
    pub summary: Option<ClimateSummary>,
    pub recommendations: BTreeSet<String>,
    pub confidence: f64,
    pub reasoning: String,
}

impl ClimateAssessment {
    pub fn recommends(&self, crop: &str) -> bool {
        self.recommendations.contains(crop)
    }
}

/// Apply the temperature and rainfall rules. Rules are not exclusive; a crop
/// picked by both collapses into one entry.
pub fn assess_climate(summary: Option<&ClimateSummary>) -> ClimateAssessment {
    let Some(summary) = ClimateSummary::present(summary) else {
        return ClimateAssessment {
            summary: None,
            recommendations: DEFAULT_CLIMATE_CROPS.iter().map(|c| c.to_string()).collect(),
            confidence: NO_CLIMATE_CONFIDENCE,
            reasoning: "Using default recommendations due to unavailable climate data".to_string(),
        };
    };

    let temp = summary.temperature();
    let rainfall = summary.rainfall();
    let mut crops: BTreeSet<String> = BTreeSet::new();
    let mut reasons = Vec::new();

    let (temp_crops, temp_reason): (&[&str], &str) = if temp > 30.0 {
        (&["Cotton", "Millet", "Soybean"], "high temperature tolerance")
    } else if temp < 15.0 {
        (&["Wheat", "Mustard", "Chickpea"], "cold temperature tolerance")
    } else {
        (&["Rice", "Maize", "Lentil"], "moderate temperature suitability")
    };
    crops.extend(temp_crops.iter().map(|c| c.to_string()));
    reasons.push(temp_reason);

    if rainfall > 1500.0 {
        crops.extend(["Rice", "Soybean"].iter().map(|c| c.to_string()));
        reasons.push("high rainfall requirement");
    } else if rainfall < 500.0 {
        crops.extend(["Millet", "Chickpea", "Lentil"].iter().map(|c| c.to_string()));
        reasons.push("drought tolerance");
    }

    ClimateAssessment {
        summary: Some(summary.clone()),
        recommendations: crops,
        confidence: CLIMATE_CONFIDENCE,
        reasoning: format!(
            "Based on temperature ({}°C) and rainfall ({}mm) - {}",
            temp,
            rainfall,
            reasons.join(", ")
        ),
    }
}

pub fn climate_suitable_crops(summary: Option<&ClimateSummary>) -> BTreeSet<String> {
    assess_climate(summary).recommendations
}
