//! API Error Types
//!
//! Error taxonomy for the proxy endpoint and its conversion to HTTP
//! responses. Every failure class - bad parameter, record not found,
//! upstream unreachable - maps to a 500 with a flat `{message, error}`
//! body; that is the contract the dashboard's fallback path expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The industry_name query parameter was missing or empty
    #[error("missing or empty 'industry_name' query parameter")]
    MissingIndustry,

    /// No aggregate row matched the requested industry
    #[error("no aggregate row found for industry '{0}'")]
    IndustryNotFound(String),

    /// The upstream statistics API call failed
    #[error("upstream statistics API error: {0}")]
    Upstream(#[from] UpstreamError),

    /// IO error (server bind/serve)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Flat error body sent to the dashboard
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_message = %self,
            "proxy request failed"
        );

        let body = ErrorBody {
            message: "backend proxy error".to_string(),
            error: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
