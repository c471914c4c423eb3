//! Carbondash Proxy API
//!
//! HTTP layer for the dashboard's backend, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/industry-data?industry_name=<label>` - industry average
//!   lookup, reshaped into the comparison envelope
//! - `GET /health/live` - liveness probe
//! - `GET /health` - status payload
//!
//! Every handler is stateless per request; the upstream snapshot is
//! fetched fresh on each proxy call and never cached.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::status));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/api/industry-data", get(routes::industry::industry_comparison))
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("carbondash proxy listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("server error: {}", e)))?;

    tracing::info!("carbondash proxy shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{IndustryRecord, IndustrySource, UpstreamError, TOTAL_MARKER};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    /// Source serving a fixed in-memory snapshot
    struct FixedSource(Vec<IndustryRecord>);

    #[async_trait]
    impl IndustrySource for FixedSource {
        async fn fetch_snapshot(&self) -> Result<Vec<IndustryRecord>, UpstreamError> {
            Ok(self.0.clone())
        }
    }

    /// Source that always fails, standing in for an unreachable upstream
    struct FailingSource;

    #[async_trait]
    impl IndustrySource for FailingSource {
        async fn fetch_snapshot(&self) -> Result<Vec<IndustryRecord>, UpstreamError> {
            Err(UpstreamError::Unreachable("connection refused".to_string()))
        }
    }

    fn record(industry: &str, category: &str, total: f64) -> IndustryRecord {
        IndustryRecord {
            industry: industry.to_string(),
            category: category.to_string(),
            total: Some(total),
        }
    }

    fn mining_snapshot() -> Vec<IndustryRecord> {
        vec![
            record("B.광업", "061.철광업", 120.0),
            record("B.광업", TOTAL_MARKER, 500.0),
        ]
    }

    fn app_with_source(source: impl IndustrySource + 'static) -> Router {
        let state = AppState::new(Arc::new(source), ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_known_industry_returns_envelope() {
        let app = app_with_source(FixedSource(mining_snapshot()));
        let (status, body) = get_json(
            app,
            "/api/industry-data?industry_name=B.%EA%B4%91%EC%97%85",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let item = &body["response"]["body"]["items"]["item"][0];
        assert_eq!(item["inds_m_cd"], "합계");
        assert_eq!(item["gas_em_ds_vl"].as_f64(), Some(500.0));
    }

    #[tokio::test]
    async fn test_unknown_industry_returns_500_naming_it() {
        let app = app_with_source(FixedSource(mining_snapshot()));
        let (status, body) = get_json(
            app,
            "/api/industry-data?industry_name=C.%EC%A0%9C%EC%A1%B0%EC%97%85",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "backend proxy error");
        assert!(body["error"].as_str().unwrap().contains("C.제조업"));
    }

    #[tokio::test]
    async fn test_missing_parameter_returns_500() {
        let app = app_with_source(FixedSource(mining_snapshot()));
        let (status, body) = get_json(app, "/api/industry-data").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("industry_name"));
    }

    #[tokio::test]
    async fn test_empty_parameter_returns_500() {
        let app = app_with_source(FixedSource(mining_snapshot()));
        let (status, _) = get_json(app, "/api/industry-data?industry_name=").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_500() {
        let app = app_with_source(FailingSource);
        let (status, body) = get_json(
            app,
            "/api/industry-data?industry_name=B.%EA%B4%91%EC%97%85",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "backend proxy error");
        assert!(body["error"].as_str().unwrap().contains("unreachable"));
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = app_with_source(FixedSource(Vec::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_status_payload() {
        let app = app_with_source(FixedSource(Vec::new()));
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_seconds"].is_u64());
    }
}
