//! Upstream Statistics Source
//!
//! Types and the fetch seam for the public greenhouse-gas dataset the
//! proxy reshapes. The payload is consumed read-only and never validated
//! against a schema; rows the lookup does not touch are ignored.

pub mod odcloud;

pub use odcloud::{OdcloudClient, OdcloudConfig};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Category label marking the aggregate row of an industry, as opposed
/// to its sub-breakdown rows.
pub const TOTAL_MARKER: &str = "합계";

/// One row of the upstream dataset.
///
/// Field names are the dataset's own Korean column headers; any other
/// columns in the payload are dropped on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryRecord {
    /// Industry label, e.g. "B.광업"
    #[serde(rename = "업종")]
    pub industry: String,
    /// Category: the total marker or a sub-breakdown name
    #[serde(rename = "구분")]
    pub category: String,
    /// Aggregate emission value in thousand tCO₂
    #[serde(rename = "합계", default)]
    pub total: Option<f64>,
}

/// Envelope the upstream API wraps its rows in
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub data: Vec<IndustryRecord>,
}

/// Errors from the upstream fetch
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Could not connect to the upstream API
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// The upstream request timed out
    #[error("upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The payload could not be decoded
    #[error("failed to parse upstream payload: {0}")]
    Parse(String),
}

/// Provider of the industry emissions snapshot.
///
/// The production implementation is [`OdcloudClient`]; tests substitute
/// an in-memory source.
#[async_trait]
pub trait IndustrySource: Send + Sync {
    /// Fetch the full snapshot. Called once per proxy request; results
    /// are never cached between requests.
    async fn fetch_snapshot(&self) -> Result<Vec<IndustryRecord>, UpstreamError>;
}

/// Linear scan for the aggregate value of an industry.
///
/// The first row whose industry matches the input exactly (case
/// sensitive, no normalization) and whose category is the total marker
/// wins; duplicates are not detected.
pub fn find_total(records: &[IndustryRecord], industry: &str) -> Option<f64> {
    records
        .iter()
        .find(|r| r.industry == industry && r.category == TOTAL_MARKER)
        .and_then(|r| r.total)
}
