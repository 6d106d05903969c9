use serde::Serialize;
use std::fmt;

/// Direction of the recent price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

impl PriceTrend {
    /// More than 5% either way counts as movement.
    pub fn from_change_pct(pct: f64) -> Self {
        if pct > 5.0 {
            PriceTrend::Rising
        } else if pct < -5.0 {
            PriceTrend::Falling
        } else {
            PriceTrend::Stable
        }
    }

    /// Score direction: +1, -1, or 0.
    pub fn sign(&self) -> i32 {
        match self {
            PriceTrend::Rising => 1,
            PriceTrend::Falling => -1,
            PriceTrend::Stable => 0,
        }
    }
}

/// Coarse profitability tier from price level and demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profitability {
    High,
    Medium,
    Low,
}

impl Profitability {
    pub fn classify(price: f64, demand: f64) -> Self {
        if price > 3000.0 && demand > 0.7 {
            Profitability::High
        } else if price < 2000.0 || demand < 0.4 {
            Profitability::Low
        } else {
            Profitability::Medium
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            Profitability::High => 1,
            Profitability::Low => -1,
            Profitability::Medium => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateFit {
    Excellent,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalTiming {
    Optimal,
}

impl PriceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Rising => "rising",
            PriceTrend::Falling => "falling",
            PriceTrend::Stable => "stable",
        }
    }
}

impl Profitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profitability::High => "high",
            Profitability::Medium => "medium",
            Profitability::Low => "low",
        }
    }
}

impl ClimateFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateFit::Excellent => "excellent",
            ClimateFit::Moderate => "moderate",
        }
    }
}

impl SeasonalTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonalTiming::Optimal => "optimal",
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Profitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ClimateFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SeasonalTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
