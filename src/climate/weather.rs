use serde::Serialize;

use super::summary::ClimateSummary;

/// Plain-language read of the prevailing conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAnalysis {
    pub current_conditions: String,
    pub forecast: String,
    pub recommendations: String,
    pub risk_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
}

pub fn analyze_weather(summary: Option<&ClimateSummary>) -> WeatherAnalysis {
    let Some(summary) = ClimateSummary::present(summary) else {
        return WeatherAnalysis {
            current_conditions: "Data unavailable".to_string(),
            forecast: "Unable to generate forecast".to_string(),
            recommendations: "Use soil-based recommendations".to_string(),
            risk_level: "medium".to_string(),
            temperature: None,
            rainfall: None,
        };
    };

    let temp = summary.temperature();
    let rainfall = summary.rainfall();

    let (conditions, risk_level, advice) = if temp > 30.0 {
        (
            "Hot and dry",
            "high",
            "Focus on drought-resistant crops, ensure irrigation",
        )
    } else if temp < 15.0 {
        (
            "Cool and wet",
            "medium",
            "Good for cool-season crops, watch for frost",
        )
    } else {
        ("Moderate temperature", "low", "Ideal conditions for most crops")
    };

    WeatherAnalysis {
        current_conditions: conditions.to_string(),
        forecast: format!(
            "Expected temperature around {}°C with {}mm rainfall",
            temp, rainfall
        ),
        recommendations: advice.to_string(),
        risk_level: risk_level.to_string(),
        temperature: Some(temp),
        rainfall: Some(rainfall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable() {
        let analysis = analyze_weather(None);
        assert_eq!(analysis.current_conditions, "Data unavailable");
        assert_eq!(analysis.risk_level, "medium");
        assert!(analysis.temperature.is_none());
    }

    #[test]
    fn test_hot() {
        let summary = ClimateSummary {
            avg_temp_c: Some(33.0),
            avg_rainfall_mm: Some(420.0),
            ..Default::default()
        };
        let analysis = analyze_weather(Some(&summary));
        assert_eq!(analysis.current_conditions, "Hot and dry");
        assert_eq!(analysis.risk_level, "high");
        assert_eq!(
            analysis.forecast,
            "Expected temperature around 33°C with 420mm rainfall"
        );
    }

    #[test]
    fn test_moderate_uses_rainfall_fallback() {
        let summary = ClimateSummary {
            avg_temp_c: Some(21.5),
            ..Default::default()
        };
        let analysis = analyze_weather(Some(&summary));
        assert_eq!(analysis.risk_level, "low");
        assert_eq!(analysis.rainfall, Some(1000.0));
    }
}
