use serde::Serialize;
use std::fmt;

use crate::climate::ClimateSummary;
use crate::market::MarketRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// High above three risks, Medium above one.
    pub fn from_count(count: usize) -> Self {
        if count > 3 {
            RiskLevel::High
        } else if count > 1 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risks paired index-for-index with their mitigations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risks: Vec<&'static str>,
    pub mitigations: Vec<&'static str>,
}

impl RiskAssessment {
    fn push(&mut self, risk: &'static str, mitigation: &'static str) {
        self.risks.push(risk);
        self.mitigations.push(mitigation);
    }
}

pub fn risk_assessment(
    crop: &str,
    climate: Option<&ClimateSummary>,
    record: Option<&MarketRecord>,
) -> RiskAssessment {
    let mut assessment = RiskAssessment {
        risk_level: RiskLevel::Low,
        risks: Vec::new(),
        mitigations: Vec::new(),
    };

    if let Some(climate) = ClimateSummary::present(climate) {
        if matches!(crop, "Rice" | "Soybean") && climate.rainfall() < 600.0 {
            assessment.push(
                "Drought risk - insufficient rainfall",
                "Ensure irrigation backup systems",
            );
        }
        if matches!(crop, "Wheat" | "Mustard") && climate.temperature() > 30.0 {
            assessment.push(
                "Heat stress risk - high temperatures",
                "Plant early or use heat-resistant varieties",
            );
        }
    }

    if let Some(record) = record {
        if record.price_change_pct < -10.0 {
            assessment.push(
                "Price volatility - declining market",
                "Consider price hedging or diversification",
            );
        }
        if record.demand_index < 0.4 {
            assessment.push("Low market demand", "Focus on quality and niche markets");
        }
    }

    assessment.push("Weather variability", "Implement crop insurance");
    assessment.push("Pest and disease pressure", "Follow integrated pest management");

    assessment.risk_level = RiskLevel::from_count(assessment.risks.len());
    assessment
}
