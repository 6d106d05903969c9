pub mod classifier;
pub mod summary;
pub mod weather;

pub use classifier::{assess_climate, climate_suitable_crops, climate_zone, ClimateAssessment, ClimateZone};
pub use summary::{ClimateSummary, PowerParameters};
pub use weather::{analyze_weather, WeatherAnalysis};
