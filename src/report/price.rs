use crate::market::MarketRecord;

/// Commentary on price movement, demand, and price level.
pub fn price_notes(record: Option<&MarketRecord>) -> Vec<String> {
    let Some(record) = record else {
        return vec!["Market data unavailable - monitor prices regularly".to_string()];
    };
    let change = record.price_change_pct;
    let demand = record.demand_index;
    let price = record.latest_price;
    let mut notes = Vec::new();

    notes.push(if change > 10.0 {
        "Strong upward price trend - excellent timing for planting"
    } else if change > 5.0 {
        "Rising prices - good market opportunity"
    } else if change < -10.0 {
        "Declining prices - consider waiting or diversifying"
    } else if change < -5.0 {
        "Price decline - monitor market closely"
    } else {
        "Stable prices - reliable market conditions"
    });

    if demand > 0.8 {
        notes.push("High market demand - prioritize this crop");
    } else if demand > 0.6 {
        notes.push("Good market demand - solid choice");
    } else if demand < 0.4 {
        notes.push("Low market demand - consider alternatives");
    }

    notes.push(if price > 4000.0 {
        "High-value crop - focus on quality production"
    } else if price > 2500.0 {
        "Moderate value - balance yield and quality"
    } else {
        "Lower value - focus on high yield and low costs"
    });

    notes.into_iter().map(String::from).collect()
}
