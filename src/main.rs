use chrono::Datelike;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crop_advisor::config::FarmProfile;
use crop_advisor::inputs::{evaluate_farms, FarmInputs};
use crop_advisor::scoring::ConsensusWeights;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank crops per farm with the base recommender (default if no subcommand)
    Recommend {
        /// Number of picks to keep per farm (overrides top_n in config)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Consensus picks with full per-crop reports
    Insights {
        /// Print every report section, not just the ranking
        #[arg(short, long)]
        detailed: bool,
    },
    /// Farm market analysis: optimal crops, opportunities, climate risks
    Analyze,
}

#[derive(Parser, Debug)]
#[command(name = "crop-advisor")]
#[command(about = "Crop recommendations from soil, climate and market signals", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/crop-advisor/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only evaluate the farm with this name
    #[arg(short, long, global = true)]
    farm: Option<String>,

    /// Calendar month used for seasonal timing (defaults to the current month)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Also write results as JSON to this file
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// One farm's result as written with --json / --out
#[derive(Serialize)]
struct FarmResult<'a, T: Serialize> {
    farm: &'a str,
    soil_type: &'a str,
    location: String,
    month: u32,
    climate_available: bool,
    market_available: bool,
    result: &'a T,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "crop_advisor=debug"
    } else {
        "crop_advisor=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print and/or write results, then exit.
fn emit<T, F>(results: &[(FarmInputs, T)], cli: &Cli, month: u32, render: F) -> !
where
    T: Serialize,
    F: Fn(&T, bool) -> String,
{
    let records: Vec<FarmResult<T>> = results
        .iter()
        .map(|(inputs, result)| FarmResult {
            farm: &inputs.farm.name,
            soil_type: &inputs.farm.soil_type,
            location: inputs.farm.location(),
            month,
            climate_available: inputs.climate_available(),
            market_available: inputs.market_available(),
            result,
        })
        .collect();

    if let Some(path) = &cli.out {
        if let Err(e) = crop_advisor::output::write_json(path, &records) {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }

    if cli.json {
        match crop_advisor::output::to_json_string(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = crop_advisor::output::should_use_colors();
        for (i, (inputs, result)) in results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "{}",
                crop_advisor::output::format_farm_header(&inputs.farm, use_colors)
            );
            println!("{}", render(result, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config = match crop_advisor::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring weights at startup
    let weights: ConsensusWeights = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = crop_advisor::scoring::validate_weights(&weights) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if config.farms.is_empty() {
        eprintln!("No farms configured in config file.");
        eprintln!("Add farms to ~/.config/crop-advisor/config.yaml:");
        eprintln!("  farms:");
        eprintln!("    - name: north-field");
        eprintln!("      soil_type: Loam");
        eprintln!("      latitude: 28.61");
        eprintln!("      longitude: 77.21");
        std::process::exit(EXIT_CONFIG);
    }

    let farms: Vec<FarmProfile> = match cli.farm.as_deref() {
        None => config.farms.clone(),
        Some(name) => match config.farm(name) {
            Some(farm) => vec![farm.clone()],
            None => {
                eprintln!("No farm named '{}' in config.", name);
                std::process::exit(EXIT_INPUT);
            }
        },
    };

    let month = cli.month.unwrap_or_else(|| chrono::Local::now().month());
    tracing::info!(farms = farms.len(), month, "evaluating");

    let default_command = Commands::Recommend { top: None };
    let command = cli.command.as_ref().unwrap_or(&default_command);
    match command {
        Commands::Recommend { top } => {
            let top_n = top
                .or(config.top_n)
                .unwrap_or(crop_advisor::recommend::DEFAULT_TOP_N);
            let results = match evaluate_farms(farms, move |inputs| {
                crop_advisor::recommend::stored_recommendations(
                    &inputs.farm.soil_type,
                    inputs.climate.as_ref(),
                    inputs.market.as_ref(),
                    top_n,
                )
            })
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Evaluation failed: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            tracing::debug!(elapsed = ?start_time.elapsed(), "recommendations ready");
            emit(&results, &cli, month, |recs, colors| {
                crop_advisor::output::format_recommendations(recs, colors)
            })
        }
        Commands::Insights { detailed } => {
            let detailed = *detailed;
            let results = match evaluate_farms(farms, move |inputs| {
                crop_advisor::insights::consensus_insights(
                    &inputs.farm.soil_type,
                    inputs.climate.as_ref(),
                    inputs.market.as_ref(),
                    month,
                    &weights,
                )
            })
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Evaluation failed: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            tracing::debug!(elapsed = ?start_time.elapsed(), "insights ready");
            emit(&results, &cli, month, |insights, colors| {
                crop_advisor::output::format_insights(insights, detailed || cli.verbose, colors)
            })
        }
        Commands::Analyze => {
            let results = match evaluate_farms(farms, move |inputs| {
                crop_advisor::insights::farm_market_insights(
                    &inputs.farm.soil_type,
                    inputs.climate.as_ref(),
                    inputs.market.as_ref(),
                    month,
                )
            })
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Evaluation failed: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            tracing::debug!(elapsed = ?start_time.elapsed(), "analysis ready");
            emit(&results, &cli, month, |insights, colors| {
                crop_advisor::output::format_farm_insights(insights, colors)
            })
        }
    }
}
