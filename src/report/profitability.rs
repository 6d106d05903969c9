use serde::Serialize;

use crate::market::MarketRecord;

/// Tons per hectare assumed for every crop.
pub const ESTIMATED_YIELD: f64 = 2.5;

/// Share of the market price taken as per-hectare cost.
pub const COST_SHARE: f64 = 0.4;

/// Per-hectare economics derived from a single market price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitEstimate {
    pub estimated_yield: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
    /// Percent of revenue; 0 when revenue is 0
    pub margin: f64,
}

impl ProfitEstimate {
    pub fn from_price(price: f64) -> Self {
        let cost = price * COST_SHARE;
        let revenue = price * ESTIMATED_YIELD;
        let profit = revenue - cost;
        let margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };
        Self {
            estimated_yield: ESTIMATED_YIELD,
            cost,
            revenue,
            profit,
            margin,
        }
    }
}

/// Profitability section of a crop report. `estimate` is None when the crop
/// has no market record, which renders as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilityAnalysis {
    pub estimate: Option<ProfitEstimate>,
    pub notes: Vec<String>,
}

pub fn profitability_analysis(record: Option<&MarketRecord>) -> ProfitabilityAnalysis {
    let Some(record) = record else {
        return ProfitabilityAnalysis {
            estimate: None,
            notes: vec!["Market data unavailable".to_string()],
        };
    };

    let estimate = ProfitEstimate::from_price(record.latest_price);
    let mut notes = vec![if estimate.margin > 50.0 {
        "Excellent profitability - high priority crop"
    } else if estimate.margin > 30.0 {
        "Good profitability - solid investment"
    } else if estimate.margin > 15.0 {
        "Moderate profitability - consider cost optimization"
    } else {
        "Low profitability - evaluate alternatives"
    }
    .to_string()];

    if record.demand_index > 0.7 {
        notes.push("High demand supports premium pricing".to_string());
    }

    ProfitabilityAnalysis {
        estimate: Some(estimate),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_from_price() {
        let estimate = ProfitEstimate::from_price(2000.0);
        assert_eq!(estimate.cost, 800.0);
        assert_eq!(estimate.revenue, 5000.0);
        assert_eq!(estimate.profit, 4200.0);
        assert!((estimate.margin - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_price_guards_margin() {
        let estimate = ProfitEstimate::from_price(0.0);
        assert_eq!(estimate.revenue, 0.0);
        assert_eq!(estimate.margin, 0.0);
    }

    #[test]
    fn test_missing_market_is_not_available() {
        let analysis = profitability_analysis(None);
        assert!(analysis.estimate.is_none());
        assert_eq!(analysis.notes, vec!["Market data unavailable"]);
    }

    #[test]
    fn test_zero_price_record_is_low_profitability() {
        let record = MarketRecord::new(0.0, 0.5);
        let analysis = profitability_analysis(Some(&record));
        assert_eq!(analysis.notes, vec!["Low profitability - evaluate alternatives"]);
    }

    #[test]
    fn test_high_demand_note() {
        let record = MarketRecord::new(3100.0, 0.75);
        let analysis = profitability_analysis(Some(&record));
        assert_eq!(
            analysis.notes,
            vec![
                "Excellent profitability - high priority crop",
                "High demand supports premium pricing",
            ]
        );
    }
}
