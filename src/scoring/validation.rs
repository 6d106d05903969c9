use super::config::ConsensusWeights;

/// Largest accepted weight. Seven maxed weights still fit in an i32 score.
pub const MAX_WEIGHT: i32 = 1000;

/// Validate consensus weights at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &ConsensusWeights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("soil_excellent", weights.soil_excellent),
        ("soil_good", weights.soil_good),
        ("climate", weights.climate),
        ("market", weights.market),
        ("price_trend", weights.price_trend),
        ("profitability", weights.profitability),
        ("seasonal", weights.seasonal),
    ];
    for (name, value) in fields {
        if let Some(v) = value {
            if v < 0 {
                errors.push(format!("scoring.{}: must be non-negative, got {}", name, v));
            } else if v > MAX_WEIGHT {
                errors.push(format!(
                    "scoring.{}: must be at most {}, got {}",
                    name, MAX_WEIGHT, v
                ));
            }
        }
    }

    // A good-tier match outranking an excellent one inverts the soil tiers
    if weights.soil_good() > weights.soil_excellent() {
        errors.push(format!(
            "scoring.soil_good: {} exceeds scoring.soil_excellent ({})",
            weights.soil_good(),
            weights.soil_excellent()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ConsensusWeights {
        ConsensusWeights {
            soil_excellent: None,
            soil_good: None,
            climate: None,
            market: None,
            price_trend: None,
            profitability: None,
            seasonal: None,
        }
    }

    #[test]
    fn test_default_weights_valid() {
        assert!(validate_weights(&ConsensusWeights::default()).is_ok());
    }

    #[test]
    fn test_empty_weights_valid() {
        assert!(validate_weights(&empty()).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let weights = ConsensusWeights {
            climate: Some(-2),
            ..empty()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.climate"));
    }

    #[test]
    fn test_oversized_weight() {
        let weights = ConsensusWeights {
            soil_excellent: Some(i32::MAX),
            ..empty()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.soil_excellent"));
        assert!(errors[0].contains("at most 1000"));
    }

    #[test]
    fn test_max_weight_accepted() {
        let weights = ConsensusWeights {
            soil_excellent: Some(MAX_WEIGHT),
            seasonal: Some(MAX_WEIGHT),
            ..empty()
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_inverted_soil_tiers() {
        let weights = ConsensusWeights {
            soil_good: Some(5),
            ..empty()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("scoring.soil_good"));
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = ConsensusWeights {
            market: Some(-1),
            seasonal: Some(-1),
            soil_good: Some(9),
            ..empty()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
