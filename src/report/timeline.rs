use serde::Serialize;

/// Phase checklists shared by every crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImplementationTimeline {
    /// Next 30 days
    pub immediate_actions: &'static [&'static str],
    /// 1-3 months
    pub short_term: &'static [&'static str],
    /// 3-6 months
    pub medium_term: &'static [&'static str],
    /// 6+ months
    pub long_term: &'static [&'static str],
}

pub const IMPLEMENTATION_TIMELINE: ImplementationTimeline = ImplementationTimeline {
    immediate_actions: &[
        "Prepare soil and test pH levels",
        "Procure quality seeds/varieties",
        "Plan irrigation system if needed",
        "Check equipment and tools",
    ],
    short_term: &[
        "Complete soil preparation",
        "Plant seeds at optimal time",
        "Monitor initial growth",
        "Apply initial fertilizers",
    ],
    medium_term: &[
        "Regular crop monitoring",
        "Pest and disease management",
        "Irrigation management",
        "Weed control",
    ],
    long_term: &[
        "Harvest planning",
        "Post-harvest handling",
        "Market preparation",
        "Crop rotation planning",
    ],
};

impl ImplementationTimeline {
    /// Phases in order with their display labels.
    pub fn phases(&self) -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("Immediate (30 days)", self.immediate_actions),
            ("Short term (1-3 months)", self.short_term),
            ("Medium term (3-6 months)", self.medium_term),
            ("Long term (6+ months)", self.long_term),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_phases_of_four_steps() {
        let phases = IMPLEMENTATION_TIMELINE.phases();
        assert_eq!(phases.len(), 4);
        assert!(phases.iter().all(|(_, steps)| steps.len() == 4));
        assert_eq!(phases[0].1[0], "Prepare soil and test pH levels");
        assert_eq!(phases[3].1[3], "Crop rotation planning");
    }
}
