pub mod metrics;
pub mod recommender;

pub use metrics::record_recommendations;
pub use recommender::{RandomRecommender, Recommender};
