use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::climate::{ClimateSummary, PowerParameters};
use crate::config::FarmProfile;
use crate::market::MarketSnapshot;

/// A farm profile together with whatever climate and market data could be
/// loaded for it. Missing or unreadable inputs are `None`.
#[derive(Debug, Clone)]
pub struct FarmInputs {
    pub farm: FarmProfile,
    pub climate: Option<ClimateSummary>,
    pub market: Option<MarketSnapshot>,
}

impl FarmInputs {
    /// True when the climate data carries at least one usable field.
    pub fn climate_available(&self) -> bool {
        ClimateSummary::present(self.climate.as_ref()).is_some()
    }

    /// True when the market snapshot is loaded and non-empty.
    pub fn market_available(&self) -> bool {
        MarketSnapshot::present(self.market.as_ref()).is_some()
    }
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: PowerParameters,
}

#[derive(Debug, Deserialize)]
struct PowerDocument {
    properties: PowerProperties,
}

/// Climate files hold either a raw POWER daily response or a summary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClimateDocument {
    Power(PowerDocument),
    Summary(ClimateSummary),
}

pub fn parse_climate(content: &str) -> Result<ClimateSummary> {
    let document: ClimateDocument =
        serde_json::from_str(content).context("not a POWER document or climate summary")?;
    Ok(match document {
        ClimateDocument::Power(doc) => ClimateSummary::from_daily(&doc.properties.parameter),
        ClimateDocument::Summary(summary) => summary,
    })
}

pub fn load_climate(path: &Path) -> Result<ClimateSummary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read climate data at {}", path.display()))?;
    parse_climate(&content)
        .with_context(|| format!("Failed to parse climate data in {}", path.display()))
}

pub fn load_market(path: &Path) -> Result<MarketSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read market data at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse market data in {}", path.display()))
}

/// Load a farm's inputs. Failures are logged and the input treated as absent,
/// so scoring always gets a well-typed "no data" instead of an error.
pub fn load_farm_inputs(farm: FarmProfile) -> FarmInputs {
    let climate = farm.climate.as_deref().and_then(|path| {
        load_climate(path)
            .map_err(|e| tracing::warn!(farm = %farm.name, "climate unavailable: {:#}", e))
            .ok()
    });
    let market = farm.market.as_deref().and_then(|path| {
        load_market(path)
            .map_err(|e| tracing::warn!(farm = %farm.name, "market unavailable: {:#}", e))
            .ok()
    });
    tracing::debug!(
        farm = %farm.name,
        climate = climate.is_some(),
        market = market.as_ref().map_or(0, |m| m.len()),
        "loaded farm inputs"
    );
    FarmInputs {
        farm,
        climate,
        market,
    }
}

/// Load and evaluate every farm on its own blocking task.
///
/// Results come back in the order the farms were given, regardless of which
/// task finishes first.
pub async fn evaluate_farms<T, F>(farms: Vec<FarmProfile>, evaluate: F) -> Result<Vec<(FarmInputs, T)>>
where
    T: Send + 'static,
    F: Fn(&FarmInputs) -> T + Send + Sync + 'static,
{
    let evaluate = Arc::new(evaluate);
    let mut futures = FuturesUnordered::new();
    for (index, farm) in farms.into_iter().enumerate() {
        let evaluate = Arc::clone(&evaluate);
        let name = farm.name.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let inputs = load_farm_inputs(farm);
            let output = evaluate(&inputs);
            (inputs, output)
        });
        futures.push(async move { (index, name, handle.await) });
    }

    let mut results = Vec::with_capacity(futures.len());
    while let Some((index, name, result)) = futures.next().await {
        let (inputs, output) =
            result.with_context(|| format!("Evaluation task for farm '{}' failed", name))?;
        results.push((index, inputs, output));
    }

    results.sort_by_key(|(index, _, _)| *index);
    Ok(results
        .into_iter()
        .map(|(_, inputs, output)| (inputs, output))
        .collect())
}
