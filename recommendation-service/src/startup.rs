//! Application startup and lifecycle management.

use crate::config::RecommendationConfig;
use crate::handlers::{
    content_recommendations, health_check, metrics_endpoint, readiness_check, service_status,
};
use crate::services::{RandomRecommender, Recommender};
use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::observability::init_metrics;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RecommendationConfig,
    pub recommender: Arc<dyn Recommender>,
}

impl AppState {
    pub fn new(config: RecommendationConfig, recommender: Arc<dyn Recommender>) -> Self {
        Self {
            config,
            recommender,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_status))
        .route("/content-recommendations", post(content_recommendations))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RecommendationConfig) -> Result<Self, AppError> {
        Self::build_with_recommender(config, Arc::new(RandomRecommender::new())).await
    }

    pub async fn build_with_recommender(
        config: RecommendationConfig,
        recommender: Arc<dyn Recommender>,
    ) -> Result<Self, AppError> {
        init_metrics();

        tracing::info!(recommender = recommender.name(), "Initialized recommender");

        // Bind HTTP listener (port 0 = random port for testing)
        let http_addr = config.common.socket_addr();
        let http_listener = TcpListener::bind(http_addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", http_addr, e);
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!("{}: HTTP on port {}", config.service_name, http_port);

        Ok(Self {
            http_port,
            http_listener,
            state: AppState::new(config, recommender),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.http_listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
