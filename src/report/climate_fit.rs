use crate::climate::ClimateSummary;

const HEAT_LOVING: [&str; 3] = ["Cotton", "Millet", "Soybean"];
const COOL_LOVING: [&str; 3] = ["Wheat", "Mustard", "Chickpea"];
const WATER_LOVING: [&str; 2] = ["Rice", "Soybean"];
const DROUGHT_TOLERANT: [&str; 3] = ["Millet", "Chickpea", "Lentil"];

/// Advisory lines on how a crop fits the local climate.
pub fn climate_fit_notes(crop: &str, climate: Option<&ClimateSummary>) -> Vec<String> {
    let Some(climate) = ClimateSummary::present(climate) else {
        return vec!["Climate data unavailable - use general recommendations".to_string()];
    };
    let temp = climate.temperature();
    let rainfall = climate.rainfall();
    let mut notes = Vec::new();

    if HEAT_LOVING.contains(&crop) {
        if temp > 30.0 {
            notes.push("Excellent for hot climate - optimal temperature range");
        } else if temp < 20.0 {
            notes.push("Consider heat management - may need greenhouse or shade");
        }
    } else if COOL_LOVING.contains(&crop) {
        if temp < 20.0 {
            notes.push("Perfect for cool climate - ideal growing conditions");
        } else if temp > 30.0 {
            notes.push("High temperature risk - plant early or use heat-resistant varieties");
        }
    }

    if WATER_LOVING.contains(&crop) {
        if rainfall > 1200.0 {
            notes.push("High rainfall suitable - ensure proper drainage");
        } else if rainfall < 600.0 {
            notes.push("Low rainfall - ensure irrigation capacity");
        }
    } else if DROUGHT_TOLERANT.contains(&crop) {
        if rainfall < 800.0 {
            notes.push("Drought-tolerant crops - perfect for low rainfall");
        } else if rainfall > 1500.0 {
            notes.push("High rainfall risk - ensure drainage systems");
        }
    }

    if notes.is_empty() {
        return vec!["Climate conditions are suitable for this crop".to_string()];
    }
    notes.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate(temp: f64, rainfall: f64) -> ClimateSummary {
        ClimateSummary {
            avg_temp_c: Some(temp),
            avg_rainfall_mm: Some(rainfall),
            ..Default::default()
        }
    }

    #[test]
    fn test_unavailable() {
        let notes = climate_fit_notes("Wheat", None);
        assert_eq!(notes, vec!["Climate data unavailable - use general recommendations"]);
    }

    #[test]
    fn test_soybean_hits_heat_and_water_groups() {
        let notes = climate_fit_notes("Soybean", Some(&climate(32.0, 1300.0)));
        assert_eq!(notes.len(), 2);
        assert!(notes[0].starts_with("Excellent for hot climate"));
        assert!(notes[1].starts_with("High rainfall suitable"));
    }

    #[test]
    fn test_chickpea_cool_and_dry() {
        let notes = climate_fit_notes("Chickpea", Some(&climate(16.0, 450.0)));
        assert_eq!(
            notes,
            vec![
                "Perfect for cool climate - ideal growing conditions",
                "Drought-tolerant crops - perfect for low rainfall",
            ]
        );
    }

    #[test]
    fn test_no_rule_fires() {
        let notes = climate_fit_notes("Maize", Some(&climate(25.0, 900.0)));
        assert_eq!(notes, vec!["Climate conditions are suitable for this crop"]);
    }
}
