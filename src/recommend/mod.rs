pub mod base;
pub mod stored;

pub use base::{recommend, CropCandidate};
pub use stored::{ecological_impact, stored_recommendations, StoredRecommendation, DEFAULT_TOP_N};
