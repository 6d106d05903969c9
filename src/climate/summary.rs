use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Temperature assumed by the classifiers when a summary omits it.
pub const FALLBACK_TEMP_C: f64 = 25.0;
/// Rainfall assumed by the classifiers when a summary omits it.
pub const FALLBACK_RAINFALL_MM: f64 = 1000.0;

/// Averaged climate metrics over a date window.
///
/// Every field is optional; a missing field means "not measured", never zero.
/// `avg_precip_mm` is the mean daily precipitation, `avg_rainfall_mm` the
/// accumulated rainfall the zone classifier works with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClimateSummary {
    #[serde(default, alias = "avg_temp", skip_serializing_if = "Option::is_none")]
    pub avg_temp_c: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_min_temp_c: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_max_temp_c: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_precip_mm: Option<f64>,

    #[serde(default, alias = "avg_rainfall", skip_serializing_if = "Option::is_none")]
    pub avg_rainfall_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rel_humidity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_solar_mj_m2: Option<f64>,
}

impl ClimateSummary {
    pub fn is_empty(&self) -> bool {
        self.avg_temp_c.is_none()
            && self.avg_min_temp_c.is_none()
            && self.avg_max_temp_c.is_none()
            && self.avg_precip_mm.is_none()
            && self.avg_rainfall_mm.is_none()
            && self.avg_rel_humidity.is_none()
            && self.avg_solar_mj_m2.is_none()
    }

    /// Treat a summary with no measurements the same as a missing one.
    pub fn present(summary: Option<&ClimateSummary>) -> Option<&ClimateSummary> {
        summary.filter(|s| !s.is_empty())
    }

    /// Temperature as seen by the classifiers.
    pub fn temperature(&self) -> f64 {
        self.avg_temp_c.unwrap_or(FALLBACK_TEMP_C)
    }

    /// Rainfall as seen by the classifiers.
    pub fn rainfall(&self) -> f64 {
        self.avg_rainfall_mm.unwrap_or(FALLBACK_RAINFALL_MM)
    }

    /// Average each daily parameter series into a summary.
    pub fn from_daily(params: &PowerParameters) -> Self {
        Self {
            avg_temp_c: mean(&params.t2m),
            avg_min_temp_c: mean(&params.t2m_min),
            avg_max_temp_c: mean(&params.t2m_max),
            avg_precip_mm: mean(&params.prectotcorr),
            avg_rainfall_mm: None,
            avg_rel_humidity: mean(&params.relhum),
            avg_solar_mj_m2: mean(&params.allsky_sfc_sw_dwn),
        }
    }
}

/// Daily parameter series keyed by `YYYYMMDD`, in the shape of the NASA POWER
/// agroclimatology `properties.parameter` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PowerParameters {
    #[serde(rename = "T2M", default)]
    pub t2m: BTreeMap<String, f64>,
    #[serde(rename = "T2M_MIN", default)]
    pub t2m_min: BTreeMap<String, f64>,
    #[serde(rename = "T2M_MAX", default)]
    pub t2m_max: BTreeMap<String, f64>,
    #[serde(rename = "PRECTOTCORR", default)]
    pub prectotcorr: BTreeMap<String, f64>,
    #[serde(rename = "RELHUM", default)]
    pub relhum: BTreeMap<String, f64>,
    #[serde(rename = "ALLSKY_SFC_SW_DWN", default)]
    pub allsky_sfc_sw_dwn: BTreeMap<String, f64>,
}

fn mean(series: &BTreeMap<String, f64>) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.values().sum::<f64>() / series.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_accept_short_keys() {
        let json = r#"{"avg_temp": 32.0, "avg_rainfall": 400.0}"#;
        let summary: ClimateSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.avg_temp_c, Some(32.0));
        assert_eq!(summary.avg_rainfall_mm, Some(400.0));
        assert!(summary.avg_precip_mm.is_none());
    }

    #[test]
    fn test_empty_summary_is_absent() {
        let empty = ClimateSummary::default();
        assert!(empty.is_empty());
        assert!(ClimateSummary::present(Some(&empty)).is_none());

        let partial = ClimateSummary {
            avg_rel_humidity: Some(60.0),
            ..Default::default()
        };
        assert!(ClimateSummary::present(Some(&partial)).is_some());
    }

    #[test]
    fn test_classifier_fallbacks() {
        let summary = ClimateSummary {
            avg_rel_humidity: Some(60.0),
            ..Default::default()
        };
        assert_eq!(summary.temperature(), 25.0);
        assert_eq!(summary.rainfall(), 1000.0);
    }

    #[test]
    fn test_from_daily_averages_each_series() {
        let json = r#"{
            "T2M": {"20240101": 20.0, "20240102": 30.0},
            "PRECTOTCORR": {"20240101": 1.0, "20240102": 2.0, "20240103": 6.0},
            "RELHUM": {}
        }"#;
        let params: PowerParameters = serde_json::from_str(json).unwrap();
        let summary = ClimateSummary::from_daily(&params);
        assert_eq!(summary.avg_temp_c, Some(25.0));
        assert_eq!(summary.avg_precip_mm, Some(3.0));
        assert!(summary.avg_rel_humidity.is_none());
        assert!(summary.avg_min_temp_c.is_none());
    }
}
