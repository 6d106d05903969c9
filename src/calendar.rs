use serde::Serialize;

/// Crops conventionally planted in a calendar month (1-12). Drives the
/// consensus seasonal bonus. Out-of-range months have no crops.
pub fn planting_crops_for_month(month: u32) -> &'static [&'static str] {
    match month {
        1 | 2 => &["Wheat", "Mustard", "Chickpea"],
        3 => &["Maize", "Rice", "Soybean"],
        4 | 5 => &["Maize", "Rice", "Cotton"],
        6..=8 => &["Rice", "Maize", "Millet", "Soybean"],
        9 => &["Wheat", "Mustard", "Lentil"],
        10 | 11 => &["Wheat", "Mustard", "Lentil", "Chickpea"],
        12 => &["Wheat", "Mustard", "Chickpea"],
        _ => &[],
    }
}

/// Season label and headline crops for a month, as shown in farm analysis.
/// Not the same list as [`planting_crops_for_month`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthSeason {
    pub season: &'static str,
    pub recommended: &'static [&'static str],
}

pub fn season_for_month(month: u32) -> MonthSeason {
    match month {
        1 | 2 | 12 => MonthSeason {
            season: "Winter",
            recommended: &["Wheat", "Mustard", "Chickpea"],
        },
        3..=5 => MonthSeason {
            season: "Spring",
            recommended: &["Maize", "Rice", "Soybean"],
        },
        6..=8 => MonthSeason {
            season: "Monsoon",
            recommended: &["Rice", "Maize", "Millet"],
        },
        9..=11 => MonthSeason {
            season: "Autumn",
            recommended: &["Wheat", "Mustard", "Lentil"],
        },
        _ => MonthSeason {
            season: "Unknown",
            recommended: &[],
        },
    }
}

/// Planting calendar for one crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropCalendar {
    pub optimal_months: &'static [u32],
    pub season: &'static str,
    pub planting_window: &'static str,
    pub harvest_window: &'static str,
}

impl CropCalendar {
    pub fn is_optimal(&self, month: u32) -> bool {
        self.optimal_months.contains(&month)
    }

    /// Smallest optimal month strictly after `month`, wrapping to the first
    /// listed optimal month when none remain this year.
    pub fn next_optimal_month(&self, month: u32) -> Option<u32> {
        self.optimal_months
            .iter()
            .copied()
            .filter(|m| *m > month)
            .min()
            .or_else(|| self.optimal_months.first().copied())
    }
}

const GENERAL_CALENDAR: CropCalendar = CropCalendar {
    optimal_months: &[3, 4, 5, 6, 7, 8],
    season: "General",
    planting_window: "March-August",
    harvest_window: "September-December",
};

pub fn crop_calendar(crop: &str) -> CropCalendar {
    match crop {
        "Wheat" => CropCalendar {
            optimal_months: &[10, 11, 12, 1, 2],
            season: "Winter",
            planting_window: "October-February",
            harvest_window: "March-May",
        },
        "Rice" => CropCalendar {
            optimal_months: &[6, 7, 8, 9],
            season: "Monsoon",
            planting_window: "June-September",
            harvest_window: "October-December",
        },
        "Maize" => CropCalendar {
            optimal_months: &[3, 4, 5, 6],
            season: "Spring-Summer",
            planting_window: "March-June",
            harvest_window: "July-September",
        },
        "Soybean" => CropCalendar {
            optimal_months: &[6, 7, 8],
            season: "Monsoon",
            planting_window: "June-August",
            harvest_window: "September-November",
        },
        "Cotton" => CropCalendar {
            optimal_months: &[4, 5, 6],
            season: "Summer",
            planting_window: "April-June",
            harvest_window: "October-December",
        },
        "Millet" => CropCalendar {
            optimal_months: &[6, 7, 8],
            season: "Monsoon",
            planting_window: "June-August",
            harvest_window: "September-November",
        },
        "Chickpea" => CropCalendar {
            optimal_months: &[10, 11, 12],
            season: "Winter",
            planting_window: "October-December",
            harvest_window: "March-May",
        },
        "Lentil" => CropCalendar {
            optimal_months: &[10, 11, 12],
            season: "Winter",
            planting_window: "October-December",
            harvest_window: "March-April",
        },
        "Mustard" => CropCalendar {
            optimal_months: &[10, 11, 12],
            season: "Winter",
            planting_window: "October-December",
            harvest_window: "February-April",
        },
        _ => GENERAL_CALENDAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_has_planting_crops() {
        for month in 1..=12 {
            assert!(!planting_crops_for_month(month).is_empty(), "month {}", month);
        }
        assert!(planting_crops_for_month(0).is_empty());
        assert!(planting_crops_for_month(13).is_empty());
    }

    #[test]
    fn test_season_table_differs_from_planting_table() {
        // April: season headline keeps Soybean, planting set swaps in Cotton
        assert!(season_for_month(4).recommended.contains(&"Soybean"));
        assert!(planting_crops_for_month(4).contains(&"Cotton"));
        assert_eq!(season_for_month(12).season, "Winter");
        assert_eq!(season_for_month(13).season, "Unknown");
    }

    #[test]
    fn test_next_optimal_month_searches_forward() {
        let chickpea = crop_calendar("Chickpea");
        assert_eq!(chickpea.optimal_months, &[10, 11, 12]);
        assert_eq!(chickpea.next_optimal_month(11), Some(12));
        assert_eq!(chickpea.next_optimal_month(3), Some(10));
    }

    #[test]
    fn test_next_optimal_month_wraps_to_first_listed() {
        let chickpea = crop_calendar("Chickpea");
        assert_eq!(chickpea.next_optimal_month(12), Some(10));

        // Wheat lists October first, so the wrap lands there even though
        // January is earlier in the year.
        let wheat = crop_calendar("Wheat");
        assert_eq!(wheat.next_optimal_month(12), Some(10));
    }

    #[test]
    fn test_unknown_crop_gets_general_calendar() {
        let calendar = crop_calendar("Quinoa");
        assert_eq!(calendar.season, "General");
        assert!(calendar.is_optimal(5));
        assert!(!calendar.is_optimal(11));
    }
}
