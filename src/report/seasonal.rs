use serde::Serialize;

use crate::calendar::crop_calendar;

/// Planting window for a crop relative to the current month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalWindow {
    pub in_window: bool,
    /// Set only when the current month is outside the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_optimal_month: Option<u32>,
    pub season: &'static str,
    pub planting_window: &'static str,
    pub harvest_window: &'static str,
    pub notes: Vec<String>,
}

pub fn seasonal_window(crop: &str, month: u32) -> SeasonalWindow {
    let calendar = crop_calendar(crop);
    let in_window = calendar.is_optimal(month);
    let next_optimal_month = if in_window {
        None
    } else {
        calendar.next_optimal_month(month)
    };

    let mut notes = Vec::with_capacity(4);
    match next_optimal_month {
        None => notes.push(format!(
            "Perfect timing! Current month ({}) is optimal for {}",
            month, crop
        )),
        Some(next) => notes.push(format!("Next optimal planting: Month {}", next)),
    }
    notes.push(format!("Planting window: {}", calendar.planting_window));
    notes.push(format!("Harvest window: {}", calendar.harvest_window));
    notes.push(format!("Best season: {}", calendar.season));

    SeasonalWindow {
        in_window,
        next_optimal_month,
        season: calendar.season,
        planting_window: calendar.planting_window,
        harvest_window: calendar.harvest_window,
        notes,
    }
}
