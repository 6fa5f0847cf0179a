//! Test helper module for recommendation-service integration tests.

#![allow(dead_code)]

use recommendation_service::config::RecommendationConfig;
use recommendation_service::services::Recommender;
use recommendation_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_USER_ID: &str = "test-user";

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

fn test_config() -> RecommendationConfig {
    RecommendationConfig {
        common: CoreConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        },
        service_name: "recommendation-service-test".to_string(),
        ..RecommendationConfig::default()
    }
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    /// Spawn with a custom recommender in place of the random one.
    pub async fn spawn_with(recommender: Arc<dyn Recommender>) -> Self {
        let app = Application::build_with_recommender(test_config(), recommender)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    async fn start(app: Application) -> Self {
        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self {
            http_address,
            http_port,
            client,
        }
    }

    pub async fn post_recommendations(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/content-recommendations", self.http_address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
