use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::config::FarmProfile;
use crate::insights::{ConsensusInsights, FarmMarketInsights};
use crate::recommend::StoredRecommendation;
use crate::report::{CropReport, RiskLevel};
use crate::scoring::CropScore;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Fit a trailing column into whatever the terminal leaves after `fixed_width`.
fn fit_to_terminal(text: &str, fixed_width: usize, term_width: Option<usize>) -> String {
    match term_width {
        Some(width) if width > fixed_width + 10 => truncate_text(text, width - fixed_width),
        Some(_) => truncate_text(text, 20),
        None => text.to_string(),
    }
}

/// Format a currency amount in compact notation (950, 4.2k, 1.5M)
pub fn format_amount(amount: f64) -> String {
    let formatted = if amount.abs() >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount.abs() >= 1_000.0 {
        format!("{:.1}k", amount / 1_000.0)
    } else {
        format!("{:.0}", amount)
    };

    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Format a confidence in [0, 1] as a whole percentage
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// One-line farm heading: name, soil, coordinates
pub fn format_farm_header(farm: &FarmProfile, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}  {} soil  ({})",
            farm.name.bold(),
            farm.soil_type.cyan(),
            farm.location().dimmed()
        )
    } else {
        format!("{}  {} soil  ({})", farm.name, farm.soil_type, farm.location())
    }
}

/// Format stored recommendations as a table: Index, Score, Crop, Profit, Rationale
/// Score column: 4 chars ("0.85"); crop column: 10 chars; profit: 6 chars
pub fn format_recommendations(recs: &[StoredRecommendation], use_colors: bool) -> String {
    if recs.is_empty() {
        return "No suitable crops found for this soil type.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";
    let fixed_width = 3 + 1 + 4 + separator.len() * 3 + 10 + 6;

    recs.iter()
        .enumerate()
        .map(|(idx, rec)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:.2}", rec.ai_score);
            let crop_str = format!("{:<10}", rec.crop_name);
            let profit_str = format!("{:>6}", format_amount(rec.profitability_estimate));
            let rationale = fit_to_terminal(&rec.rationale, fixed_width, term_width);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    crop_str.green(),
                    separator,
                    profit_str.yellow(),
                    separator,
                    rationale
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, crop_str, separator, profit_str, separator,
                    rationale
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format consensus picks as a table: Index, Score, Confidence, Crop, Rationale
pub fn format_consensus_table(scores: &[CropScore], use_colors: bool) -> String {
    if scores.is_empty() {
        return "No consensus crops.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";
    let fixed_width = 3 + 1 + 3 + separator.len() * 3 + 4 + 10;

    scores
        .iter()
        .enumerate()
        .map(|(idx, score)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", score.score);
            let confidence_str = format!("{:>4}", format_confidence(score.confidence));
            let crop_str = format!("{:<10}", score.crop_name);
            let rationale = fit_to_terminal(&score.rationale(), fixed_width, term_width);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    confidence_str.dimmed(),
                    separator,
                    crop_str.green(),
                    separator,
                    rationale
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    confidence_str,
                    separator,
                    crop_str,
                    separator,
                    rationale
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_section(out: &mut Vec<String>, title: &str, lines: &[String], use_colors: bool) {
    if use_colors {
        out.push(format!("  {}", title.underline()));
    } else {
        out.push(format!("  {}", title));
    }
    out.extend(lines.iter().map(|l| format!("    - {}", l)));
}

/// Format one crop report with every narrative section (verbose mode)
pub fn format_crop_report(report: &CropReport, use_colors: bool) -> String {
    let mut out = Vec::new();
    let heading = format!(
        "{}  score {}  confidence {}",
        report.crop_name,
        report.overall_score,
        format_confidence(report.confidence)
    );
    if use_colors {
        out.push(heading.bold().to_string());
    } else {
        out.push(heading);
    }
    out.push(format!("  Why: {}", report.rationale));
    out.push(format!(
        "  Tags: trend {}, profitability {}, climate {}, timing {}",
        report.details.price_trend,
        report.details.profitability,
        report.details.climate_suitability,
        report.details.seasonal_timing
    ));

    push_section(&mut out, "Climate", &report.climate_recommendations, use_colors);
    push_section(&mut out, "Prices", &report.price_recommendations, use_colors);
    push_section(&mut out, "Timing", &report.seasonal_recommendations.notes, use_colors);

    let mut profit_lines = Vec::new();
    match &report.profitability_analysis.estimate {
        Some(estimate) => profit_lines.push(format!(
            "Profit {}/ha on revenue {}/ha (margin {:.0}%)",
            format_amount(estimate.profit),
            format_amount(estimate.revenue),
            estimate.margin
        )),
        None => profit_lines.push("Profit N/A, margin N/A".to_string()),
    }
    profit_lines.extend(report.profitability_analysis.notes.iter().cloned());
    push_section(&mut out, "Profitability", &profit_lines, use_colors);

    let risk = &report.risk_assessment;
    let level = match (use_colors, risk.risk_level) {
        (false, level) => level.to_string(),
        (true, RiskLevel::High) => "High".red().to_string(),
        (true, RiskLevel::Medium) => "Medium".yellow().to_string(),
        (true, RiskLevel::Low) => "Low".green().to_string(),
    };
    let risk_lines: Vec<String> = risk
        .risks
        .iter()
        .zip(&risk.mitigations)
        .map(|(r, m)| format!("{} -> {}", r, m))
        .collect();
    push_section(&mut out, &format!("Risk ({})", level), &risk_lines, use_colors);

    for (phase, steps) in report.implementation_timeline.phases() {
        let steps: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
        push_section(&mut out, phase, &steps, use_colors);
    }

    let factors: Vec<String> = report.success_factors.iter().map(|s| s.to_string()).collect();
    push_section(&mut out, "Success factors", &factors, use_colors);

    out.join("\n")
}

/// Weather line plus the consensus table, optionally followed by full reports
pub fn format_insights(insights: &ConsensusInsights, detailed: bool, use_colors: bool) -> String {
    let weather = &insights.weather_analysis;
    let mut out = vec![
        format!(
            "Weather: {} (risk {}) - {}",
            weather.current_conditions, weather.risk_level, weather.recommendations
        ),
        format_consensus_table(&insights.consensus_crops, use_colors),
    ];

    if detailed {
        for report in &insights.comprehensive_recommendations {
            out.push(String::new());
            out.push(format_crop_report(report, use_colors));
        }
    }
    out.join("\n")
}

/// Format the farm market analysis
pub fn format_farm_insights(insights: &FarmMarketInsights, use_colors: bool) -> String {
    let mut out = vec![
        format!("Climate zone: {}", insights.climate_zone),
        format!(
            "Optimal crops: {}",
            if insights.optimal_crops.is_empty() {
                "none".to_string()
            } else {
                insights.optimal_crops.join(", ")
            }
        ),
    ];

    let opportunities: Vec<String> = insights
        .market_opportunities
        .iter()
        .map(|o| {
            format!(
                "{:<10} price {:>6}  demand {:.2}  trend {:+.1}%  score {:.2}",
                o.crop,
                format_amount(o.price),
                o.demand,
                o.trend,
                o.opportunity_score
            )
        })
        .collect();
    if !opportunities.is_empty() {
        push_section(&mut out, "Market opportunities", &opportunities, use_colors);
    }

    let profits: Vec<String> = insights
        .profitability_analysis
        .iter()
        .map(|(crop, p)| {
            format!(
                "{:<10} profit {:>6}/ha  cost {:>6}/ha  margin {:.0}%",
                crop,
                format_amount(p.profit),
                format_amount(p.cost),
                p.margin
            )
        })
        .collect();
    if !profits.is_empty() {
        push_section(&mut out, "Profitability", &profits, use_colors);
    }

    if !insights.risk_factors.is_empty() {
        let risks: Vec<String> = insights.risk_factors.iter().map(|r| r.to_string()).collect();
        push_section(&mut out, "Risk factors", &risks, use_colors);
    }

    let seasonal = &insights.seasonal_recommendations;
    out.push(format!(
        "Season: {} (plant now: {})",
        seasonal.current_season,
        if seasonal.recommended_crops.is_empty() {
            "none".to_string()
        } else {
            seasonal.recommended_crops.join(", ")
        }
    ));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{consensus_insights, farm_market_insights};
    use crate::market::{MarketRecord, MarketSnapshot};
    use crate::recommend::stored_recommendations;
    use crate::scoring::ConsensusWeights;

    fn snapshot() -> MarketSnapshot {
        vec![
            ("Wheat", MarketRecord::new(2200.0, 0.5)),
            ("Maize", MarketRecord::new(1800.0, 0.6)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(880.0), "880");
        assert_eq!(format_amount(1000.0), "1k");
        assert_eq!(format_amount(4620.0), "4.6k");
        assert_eq!(format_amount(2_300_000.0), "2.3M");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.5), "50%");
        assert_eq!(format_confidence(0.8167), "82%");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 20), "Short");
        assert_eq!(truncate_text("This is a very long rationale", 15), "This is a ve...");
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_fit_to_terminal_without_tty() {
        let text = "Suitable for Loam soil; Suitable temperature range";
        assert_eq!(fit_to_terminal(text, 30, None), text);
        assert_eq!(fit_to_terminal(text, 30, Some(35)).chars().count(), 20);
    }

    #[test]
    fn test_format_recommendations_empty() {
        assert_eq!(
            format_recommendations(&[], false),
            "No suitable crops found for this soil type."
        );
    }

    #[test]
    fn test_format_recommendations_rows() {
        let market = snapshot();
        let recs = stored_recommendations("Loam", None, Some(&market), 5);
        let result = format_recommendations(&recs, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), recs.len());
        assert!(lines[0].starts_with(" 1. "));
        assert!(result.contains("Wheat"));
    }

    #[test]
    fn test_format_insights_detailed() {
        let insights = consensus_insights("Loam", None, None, 11, &ConsensusWeights::default());
        let brief = format_insights(&insights, false, false);
        assert!(brief.starts_with("Weather: Data unavailable (risk medium)"));
        assert!(!brief.contains("Success factors"));

        let detailed = format_insights(&insights, true, false);
        assert!(detailed.contains("Success factors"));
        assert!(detailed.contains("Profit N/A, margin N/A"));
        assert!(detailed.contains("Immediate (30 days)"));
    }

    #[test]
    fn test_format_consensus_table_empty() {
        assert_eq!(format_consensus_table(&[], false), "No consensus crops.");
    }

    #[test]
    fn test_format_farm_insights() {
        let market = snapshot();
        let insights = farm_market_insights("Loam", None, Some(&market), 1);
        let result = format_farm_insights(&insights, false);
        assert!(result.contains("Climate zone: Unknown"));
        assert!(result.contains("Optimal crops: Wheat, Maize, Rice"));
        assert!(result.contains("Market opportunities"));
        assert!(result.contains("Season: Winter (plant now: Wheat)"));
    }

    #[test]
    fn test_format_farm_header() {
        let farm = FarmProfile {
            name: "North Field".to_string(),
            soil_type: "Loam".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
            climate: None,
            market: None,
        };
        assert_eq!(
            format_farm_header(&farm, false),
            "North Field  Loam soil  (28.6139, 77.2090)"
        );
    }
}
