use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dated observation in a price series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendTag {
    Upward,
    Downward,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityTag {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityTag {
    Harvest,
    Monsoon,
    Normal,
}

/// Categorical tags attached to a market record by the data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarketInsights {
    pub trend: TrendTag,
    pub volatility: VolatilityTag,
    pub seasonality: SeasonalityTag,
}

fn default_demand_index() -> f64 {
    0.5
}

/// Market state for one crop.
///
/// Missing numeric fields take the provider's conventional defaults:
/// price 0, demand 0.5, change 0%.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarketRecord {
    #[serde(default)]
    pub latest_price: f64,

    #[serde(default = "default_demand_index")]
    pub demand_index: f64,

    /// Signed percentage change across the trend series
    #[serde(default)]
    pub price_change_pct: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trend_series: Vec<PricePoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_insights: Option<MarketInsights>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_level: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance_level: Option<f64>,
}

impl MarketRecord {
    /// Minimal record with just a price and demand, as used in fixtures.
    pub fn new(latest_price: f64, demand_index: f64) -> Self {
        Self {
            latest_price,
            demand_index,
            price_change_pct: 0.0,
            trend_series: Vec::new(),
            market_insights: None,
            support_level: None,
            resistance_level: None,
        }
    }

    pub fn with_change(mut self, price_change_pct: f64) -> Self {
        self.price_change_pct = price_change_pct;
        self
    }

    /// Derive a full record from a chronological price series.
    ///
    /// Demand is inferred from the price movement and clamped to [0.1, 0.9].
    /// Returns None for an empty series or a zero opening price.
    pub fn from_series(
        series: Vec<PricePoint>,
        volatility: VolatilityTag,
        seasonality: SeasonalityTag,
    ) -> Option<Self> {
        let first = series.first()?.price;
        let last = series.last()?.price;
        if first == 0.0 {
            return None;
        }

        let change = (last - first) / first;
        let trend = if change > 0.02 {
            TrendTag::Upward
        } else if change < -0.02 {
            TrendTag::Downward
        } else {
            TrendTag::Stable
        };

        Some(Self {
            latest_price: last,
            demand_index: (0.5 + change * 2.0).clamp(0.1, 0.9),
            price_change_pct: round2(change * 100.0),
            trend_series: series,
            market_insights: Some(MarketInsights {
                trend,
                volatility,
                seasonality,
            }),
            support_level: Some(round2(last * 0.9)),
            resistance_level: Some(round2(last * 1.1)),
        })
    }

    /// Price weighted by demand; the market scorer's ranking key.
    pub fn profit_score(&self) -> f64 {
        self.latest_price * self.demand_index
    }
}

/// Per-crop market records for one request.
///
/// Backed by an ordered map so iteration, and therefore tie-breaking in the
/// market ranking, is alphabetical by crop name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MarketSnapshot {
    records: BTreeMap<String, MarketRecord>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, crop: impl Into<String>, record: MarketRecord) {
        self.records.insert(crop.into(), record);
    }

    pub fn get(&self, crop: &str) -> Option<&MarketRecord> {
        self.records.get(crop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MarketRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Treat an empty snapshot the same as a missing one.
    pub fn present(snapshot: Option<&MarketSnapshot>) -> Option<&MarketSnapshot> {
        snapshot.filter(|s| !s.is_empty())
    }
}

impl<S: Into<String>> FromIterator<(S, MarketRecord)> for MarketSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, MarketRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, price: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 10, day).unwrap(),
            price,
        }
    }

    #[test]
    fn test_record_defaults() {
        let record: MarketRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.latest_price, 0.0);
        assert_eq!(record.demand_index, 0.5);
        assert_eq!(record.price_change_pct, 0.0);
        assert!(record.trend_series.is_empty());
    }

    #[test]
    fn test_snapshot_parses_provider_shape() {
        let json = r#"{
            "Wheat": {
                "latest_price": 2310.5,
                "demand_index": 0.62,
                "price_change_pct": 4.1,
                "trend_series": [{"date": "2024-10-01", "price": 2219.0}],
                "market_insights": {"trend": "upward", "volatility": "low", "seasonality": "harvest"},
                "support_level": 2079.45,
                "resistance_level": 2541.55
            }
        }"#;
        let snapshot: MarketSnapshot = serde_json::from_str(json).unwrap();
        let wheat = snapshot.get("Wheat").unwrap();
        assert_eq!(wheat.trend_series.len(), 1);
        assert_eq!(
            wheat.market_insights.unwrap().trend,
            TrendTag::Upward
        );
    }

    #[test]
    fn test_from_series_derives_fields() {
        let series = vec![point(1, 2000.0), point(2, 2050.0), point(3, 2100.0)];
        let record =
            MarketRecord::from_series(series, VolatilityTag::Low, SeasonalityTag::Harvest).unwrap();
        assert_eq!(record.latest_price, 2100.0);
        assert_eq!(record.price_change_pct, 5.0);
        assert!((record.demand_index - 0.6).abs() < 1e-9);
        assert_eq!(record.support_level, Some(1890.0));
        assert_eq!(record.resistance_level, Some(2310.0));
        assert_eq!(record.market_insights.unwrap().trend, TrendTag::Upward);
    }

    #[test]
    fn test_from_series_clamps_demand() {
        let crash = vec![point(1, 1000.0), point(2, 500.0)];
        let record =
            MarketRecord::from_series(crash, VolatilityTag::High, SeasonalityTag::Normal).unwrap();
        assert_eq!(record.demand_index, 0.1);
        assert_eq!(record.market_insights.unwrap().trend, TrendTag::Downward);
    }

    #[test]
    fn test_from_series_rejects_empty() {
        assert!(MarketRecord::from_series(vec![], VolatilityTag::Low, SeasonalityTag::Normal).is_none());
        let zero = vec![point(1, 0.0), point(2, 10.0)];
        assert!(MarketRecord::from_series(zero, VolatilityTag::Low, SeasonalityTag::Normal).is_none());
    }

    #[test]
    fn test_snapshot_iterates_alphabetically() {
        let snapshot: MarketSnapshot = vec![
            ("Wheat", MarketRecord::new(2200.0, 0.5)),
            ("Cotton", MarketRecord::new(6000.0, 0.5)),
            ("Maize", MarketRecord::new(1800.0, 0.5)),
        ]
        .into_iter()
        .collect();
        let crops: Vec<&str> = snapshot.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(crops, vec!["Cotton", "Maize", "Wheat"]);
    }

    #[test]
    fn test_empty_snapshot_is_absent() {
        let empty = MarketSnapshot::new();
        assert!(MarketSnapshot::present(Some(&empty)).is_none());
        assert!(MarketSnapshot::present(None).is_none());
    }
}
