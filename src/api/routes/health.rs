//! Health Routes
//!
//! - GET /health/live - liveness probe
//! - GET /health - status payload

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive; no dependency checks. The
/// upstream API is deliberately not probed here - it is called per
/// request and its failures belong to the proxy endpoint.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn status(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        assert_eq!(liveness().await, StatusCode::OK);
    }
}
