//! Industry Comparison Route
//!
//! The proxy endpoint. Each request re-fetches the upstream snapshot,
//! scans it for the requested industry's aggregate row, and reshapes the
//! match into the fixed comparison envelope.
//!
//! - GET /api/industry-data?industry_name=<urlencoded label>

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::dto::ComparisonEnvelope;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::upstream::find_total;

/// Query parameters of the proxy endpoint
#[derive(Debug, Deserialize)]
pub struct IndustryQuery {
    #[serde(default)]
    pub industry_name: Option<String>,
}

/// GET /api/industry-data
///
/// Looks up the aggregate ("합계") row of the named industry in the
/// upstream snapshot. Found rows come back as a 200 envelope; a missing
/// parameter, a missing row, and an upstream failure all surface as 500.
pub async fn industry_comparison(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndustryQuery>,
) -> ApiResult<Json<ComparisonEnvelope>> {
    let industry = query
        .industry_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingIndustry)?;

    tracing::info!(industry = %industry, "fetching upstream emissions snapshot");

    let records = state.source.fetch_snapshot().await?;

    let total = find_total(&records, industry)
        .ok_or_else(|| ApiError::IndustryNotFound(industry.to_string()))?;

    tracing::info!(industry = %industry, value = total, "matched aggregate row");

    Ok(Json(ComparisonEnvelope::single(total)))
}
