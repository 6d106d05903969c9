use crate::soil::SoilType;

fn soil_advisory(soil: &str) -> Option<&'static str> {
    match SoilType::parse(soil)? {
        SoilType::Loam => Some("Loam soil provides excellent drainage and water retention"),
        SoilType::Clay => Some("Clay soil needs proper drainage - consider raised beds"),
        SoilType::Sandy => Some("Sandy soil needs frequent irrigation and organic matter"),
        _ => None,
    }
}

fn crop_tips(crop: &str) -> &'static [&'static str] {
    match crop {
        "Wheat" => &[
            "Proper seed rate (100-120 kg/hectare)",
            "Timely sowing in October-November",
            "Balanced NPK fertilization",
        ],
        "Rice" => &[
            "Water management is critical",
            "Transplanting at proper age",
            "Pest management for stem borer",
        ],
        "Maize" => &[
            "High seed rate (20-25 kg/hectare)",
            "Proper spacing (60x20 cm)",
            "Zinc application",
        ],
        "Soybean" => &[
            "Inoculation with Rhizobium",
            "Proper spacing (45x10 cm)",
            "Timely harvesting to prevent shattering",
        ],
        "Cotton" => &[
            "High seed rate (8-10 kg/hectare)",
            "Proper spacing (90x60 cm)",
            "Pest management for bollworm",
        ],
        "Millet" => &[
            "Low seed rate (8-10 kg/hectare)",
            "Drought-resistant varieties",
            "Minimal irrigation",
        ],
        "Chickpea" => &[
            "Proper spacing (30x10 cm)",
            "Timely sowing in October",
            "Disease-resistant varieties",
        ],
        "Lentil" => &[
            "Low seed rate (30-40 kg/hectare)",
            "Proper spacing (30x10 cm)",
            "Timely harvesting",
        ],
        "Mustard" => &[
            "Proper spacing (45x10 cm)",
            "Balanced fertilization",
            "Pest management for aphids",
        ],
        _ => &["Follow general agricultural practices"],
    }
}

/// Soil advisory (Loam, Clay and Sandy only) followed by crop tips.
pub fn success_factors(crop: &str, soil: &str) -> Vec<&'static str> {
    soil_advisory(soil)
        .into_iter()
        .chain(crop_tips(crop).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_line_then_tips() {
        let factors = success_factors("Rice", "Clay");
        assert_eq!(factors.len(), 4);
        assert_eq!(factors[0], "Clay soil needs proper drainage - consider raised beds");
        assert_eq!(factors[1], "Water management is critical");
    }

    #[test]
    fn test_no_soil_line_for_peaty() {
        let factors = success_factors("Wheat", "Peaty");
        assert_eq!(factors.len(), 3);
        assert_eq!(factors[0], "Proper seed rate (100-120 kg/hectare)");
    }

    #[test]
    fn test_unknown_crop_fallback() {
        let factors = success_factors("Quinoa", "Atlantis");
        assert_eq!(factors, vec!["Follow general agricultural practices"]);
    }
}
