use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ConsensusWeights;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub farms: Vec<FarmProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ConsensusWeights>,

    /// Number of base recommendations kept per farm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
}

impl Config {
    pub fn farm(&self, name: &str) -> Option<&FarmProfile> {
        self.farms.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FarmProfile {
    pub name: String,
    pub soil_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Climate JSON: a POWER daily document or a ready summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<PathBuf>,
    /// Market snapshot JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<PathBuf>,
}

impl FarmProfile {
    pub fn location(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
