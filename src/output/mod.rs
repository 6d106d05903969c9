pub mod formatter;
pub mod json;

pub use formatter::{
    format_amount, format_confidence, format_consensus_table, format_crop_report,
    format_farm_header, format_farm_insights, format_insights, format_recommendations,
    should_use_colors,
};
pub use json::{to_json_string, write_json};
