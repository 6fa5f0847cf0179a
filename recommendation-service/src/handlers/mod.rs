//! HTTP handlers for recommendation-service.

pub mod health;
pub mod recommendations;

pub use health::{health_check, metrics_endpoint, readiness_check, service_status};
pub use recommendations::content_recommendations;
