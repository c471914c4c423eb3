//! Dashboard Comparison Client
//!
//! HTTP client the dashboard uses to resolve the "vs. industry average"
//! KPI through the proxy endpoint. One outbound request per settings
//! change; a failed call is terminal until the user acts again - no
//! retry, no backoff.

use reqwest::Client;
use thiserror::Error;

use crate::api::dto::ComparisonEnvelope;

/// Default proxy base URL
pub const DEFAULT_PROXY_BASE: &str = "http://localhost:3000";

/// Errors from one comparison fetch
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The proxy answered with a non-success status
    #[error("proxy returned status {0}")]
    Status(u16),

    /// The envelope came back without the expected value field
    #[error("missing 'gas_em_ds_vl' field in proxy response")]
    MissingField,
}

/// Client for the industry comparison endpoint
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn comparison_url(&self, industry: &str) -> String {
        format!(
            "{}/api/industry-data?industry_name={}",
            self.base_url,
            urlencoding::encode(industry)
        )
    }

    /// Fetch the published average emission for an industry, in
    /// thousand tCO₂.
    pub async fn fetch_industry_average(&self, industry: &str) -> Result<f64, ClientError> {
        let response = self.client.get(self.comparison_url(industry)).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let envelope: ComparisonEnvelope = response.json().await?;
        envelope.industry_average().ok_or(ClientError::MissingField)
    }

    /// Resolve the comparison KPI for an industry.
    ///
    /// Never fails: any error collapses into the fixed "integration
    /// failed" state, with the detail going to the log only.
    pub async fn industry_kpi(&self, industry: &str, own_total: f64) -> IndustryKpi {
        match self.fetch_industry_average(industry).await {
            Ok(average) => {
                let diff = comparison_percent(own_total, average);
                tracing::info!(
                    industry = %industry,
                    average_kt = average,
                    own_t = own_total,
                    diff_percent = diff,
                    "industry comparison resolved"
                );
                IndustryKpi::comparison(industry, diff)
            }
            Err(e) => {
                tracing::error!(industry = %industry, error = %e, "industry comparison failed");
                IndustryKpi::unavailable()
            }
        }
    }
}

impl Default for DashboardClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_BASE)
    }
}

/// Signed percentage of the company's total against the industry
/// average. The average is published in thousand tCO₂, hence the ×1000
/// unit scaling; positive means worse than the average.
pub fn comparison_percent(own_total_t: f64, industry_average_kt: f64) -> f64 {
    ((own_total_t / (industry_average_kt * 1000.0)) - 1.0) * 100.0
}

/// Styling class of the KPI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiTone {
    /// Above the industry average
    Alert,
    /// At or below the industry average
    Favorable,
    /// Comparison unavailable
    Neutral,
}

/// The rendered state of the industry comparison KPI
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryKpi {
    pub title: String,
    pub value: String,
    pub tone: KpiTone,
}

impl IndustryKpi {
    /// KPI for a resolved comparison percentage
    pub fn comparison(industry: &str, diff: f64) -> Self {
        let (value, tone) = if diff > 0.0 {
            (format!("+{:.1}%", diff), KpiTone::Alert)
        } else {
            (format!("{:.1}%", diff), KpiTone::Favorable)
        };

        Self {
            title: format!("vs. {} average", industry),
            value,
            tone,
        }
    }

    /// Fixed fallback state for any failed fetch
    pub fn unavailable() -> Self {
        Self {
            title: "vs. industry average".to_string(),
            value: "integration failed".to_string(),
            tone: KpiTone::Neutral,
        }
    }
}
