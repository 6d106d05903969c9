use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil classes a farm profile can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loam,
    Clay,
    Sandy,
    Silty,
    Peaty,
    Chalky,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Loam,
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Silty,
        SoilType::Peaty,
        SoilType::Chalky,
    ];

    /// Parse a soil name, ignoring surrounding whitespace and ASCII case.
    /// Returns None for anything outside the known set.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loam => "Loam",
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
            SoilType::Chalky => "Chalky",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Excellent/good/moderate crop buckets for one soil type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilTiers {
    pub excellent: &'static [&'static str],
    pub good: &'static [&'static str],
    pub moderate: &'static [&'static str],
}

impl SoilTiers {
    pub fn is_excellent(&self, crop: &str) -> bool {
        self.excellent.contains(&crop)
    }

    pub fn is_good(&self, crop: &str) -> bool {
        self.good.contains(&crop)
    }
}

const LOAM_TIERS: SoilTiers = SoilTiers {
    excellent: &["Wheat", "Maize", "Soybean", "Rice"],
    good: &["Chickpea", "Lentil", "Mustard"],
    moderate: &["Millet", "Cotton"],
};

/// Tiered suitability lookup. Unknown soil types get the Loam tiers.
pub fn soil_tiers(soil: &str) -> SoilTiers {
    match SoilType::parse(soil) {
        Some(SoilType::Loam) | None => LOAM_TIERS,
        Some(SoilType::Clay) => SoilTiers {
            excellent: &["Rice", "Wheat"],
            good: &["Maize", "Soybean"],
            moderate: &["Chickpea", "Lentil"],
        },
        Some(SoilType::Sandy) => SoilTiers {
            excellent: &["Millet", "Cotton"],
            good: &["Chickpea", "Lentil"],
            moderate: &["Wheat", "Maize"],
        },
        Some(SoilType::Silty) => SoilTiers {
            excellent: &["Wheat", "Rice", "Maize"],
            good: &["Soybean", "Mustard"],
            moderate: &["Chickpea", "Lentil"],
        },
        Some(SoilType::Peaty) => SoilTiers {
            excellent: &["Rice", "Mustard"],
            good: &["Wheat", "Maize"],
            moderate: &["Soybean", "Chickpea"],
        },
        Some(SoilType::Chalky) => SoilTiers {
            excellent: &["Wheat", "Mustard"],
            good: &["Maize", "Chickpea"],
            moderate: &["Soybean", "Lentil"],
        },
    }
}

/// Candidate list used by the base recommender. This table predates the tier
/// table and lists a different crop set; unknown soils have no candidates.
pub fn base_soil_candidates(soil: &str) -> &'static [&'static str] {
    match SoilType::parse(soil) {
        Some(SoilType::Loam) => &["Wheat", "Maize", "Soybean", "Chickpea", "Vegetables"],
        Some(SoilType::Clay) => &["Rice", "Mustard", "Wheat"],
        Some(SoilType::Sandy) => &["Millet", "Groundnut", "Cotton"],
        Some(SoilType::Silty) => &["Rice", "Wheat", "Lentil"],
        Some(SoilType::Peaty) => &["Carrot", "Onion", "Cabbage"],
        Some(SoilType::Chalky) => &["Barley", "Beet", "Oats"],
        None => &[],
    }
}

/// Flat soil list used by the farm market analysis.
pub fn farm_soil_crops(soil: &str) -> &'static [&'static str] {
    match SoilType::parse(soil) {
        Some(SoilType::Loam) => &[
            "Wheat", "Maize", "Soybean", "Rice", "Chickpea", "Lentil", "Mustard",
        ],
        Some(SoilType::Clay) => &["Rice", "Wheat", "Maize", "Soybean"],
        Some(SoilType::Sandy) => &["Millet", "Cotton", "Chickpea", "Lentil"],
        Some(SoilType::Silty) => &["Wheat", "Rice", "Maize", "Soybean", "Mustard"],
        Some(SoilType::Peaty) => &["Rice", "Mustard", "Wheat", "Maize"],
        Some(SoilType::Chalky) => &["Wheat", "Mustard", "Maize", "Chickpea"],
        None => &["Wheat", "Maize", "Rice"],
    }
}

pub const SOIL_CONFIDENCE: f64 = 0.85;

/// Soil signal as fed into the consensus engine.
#[derive(Debug, Clone, Serialize)]
pub struct SoilAssessment {
    pub soil_type: String,
    pub recommendations: SoilTiers,
    pub confidence: f64,
    pub reasoning: String,
}

impl SoilAssessment {
    /// Names the tier table that actually scored this soil, e.g. "Clay soil"
    /// or "Loam tiers (fallback for Volcanic)".
    pub fn tier_source(&self) -> String {
        match SoilType::parse(&self.soil_type) {
            Some(soil) => format!("{} soil", soil),
            None => format!("{} tiers (fallback for {})", SoilType::Loam, self.soil_type),
        }
    }
}

pub fn assess_soil(soil: &str) -> SoilAssessment {
    SoilAssessment {
        soil_type: soil.to_string(),
        recommendations: soil_tiers(soil),
        confidence: SOIL_CONFIDENCE,
        reasoning: format!(
            "Based on {} soil characteristics and nutrient availability",
            soil
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_source_names_fallback() {
        assert_eq!(assess_soil("clay").tier_source(), "Clay soil");
        assert_eq!(
            assess_soil("Volcanic").tier_source(),
            "Loam tiers (fallback for Volcanic)"
        );
    }

    #[test]
    fn test_every_known_soil_has_all_tiers() {
        for soil in SoilType::ALL {
            let tiers = soil_tiers(soil.as_str());
            assert!(!tiers.excellent.is_empty(), "{} excellent", soil);
            assert!(!tiers.good.is_empty(), "{} good", soil);
            assert!(!tiers.moderate.is_empty(), "{} moderate", soil);
        }
    }

    #[test]
    fn test_unknown_soil_falls_back_to_loam() {
        assert_eq!(soil_tiers("Volcanic"), soil_tiers("Loam"));
        assert_eq!(soil_tiers(""), LOAM_TIERS);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SoilType::parse(" sandy "), Some(SoilType::Sandy));
        assert_eq!(SoilType::parse("CHALKY"), Some(SoilType::Chalky));
        assert_eq!(SoilType::parse("gravel"), None);
    }

    #[test]
    fn test_base_table_differs_from_tier_table() {
        let base = base_soil_candidates("Peaty");
        let tiers = soil_tiers("Peaty");
        assert_eq!(base, &["Carrot", "Onion", "Cabbage"]);
        assert!(!base.iter().any(|c| tiers.is_excellent(c)));
    }

    #[test]
    fn test_base_table_has_no_fallback() {
        assert!(base_soil_candidates("Volcanic").is_empty());
    }

    #[test]
    fn test_farm_soil_crops_fallback() {
        assert_eq!(farm_soil_crops("Volcanic"), &["Wheat", "Maize", "Rice"]);
        assert_eq!(farm_soil_crops("Sandy").len(), 4);
    }

    #[test]
    fn test_assess_soil_keeps_raw_name() {
        let assessment = assess_soil("Clay");
        assert_eq!(assessment.soil_type, "Clay");
        assert_eq!(assessment.confidence, 0.85);
        assert!(assessment.recommendations.is_excellent("Rice"));
        assert!(assessment.recommendations.is_good("Maize"));
        assert!(assessment.reasoning.contains("Clay soil"));
    }
}
