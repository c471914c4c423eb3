//! odcloud.kr Client
//!
//! HTTP client for the odcloud.kr open-data API serving the industry
//! greenhouse-gas dataset. The record count is in the low hundreds, so a
//! single page sized above it covers the whole dataset in one call.

use async_trait::async_trait;
use reqwest::Client;

use super::{IndustryRecord, IndustrySource, Snapshot, UpstreamError};

/// Configuration for the odcloud client
#[derive(Debug, Clone)]
pub struct OdcloudConfig {
    /// Dataset endpoint URL, without query parameters
    pub base_url: String,
    /// Service key issued by odcloud.kr; injected, never a source literal
    pub service_key: String,
    /// Rows requested per call; must exceed the dataset's row count
    pub page_size: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for OdcloudConfig {
    fn default() -> Self {
        Self {
            base_url:
                "https://api.odcloud.kr/api/15017225/v1/uddi:bb1a2735-6f3d-44d9-bd36-a3d717d4af8e"
                    .to_string(),
            service_key: String::new(),
            page_size: 300,
            request_timeout_ms: 10_000,
        }
    }
}

/// Client fetching the emissions snapshot from odcloud.kr
pub struct OdcloudClient {
    client: Client,
    config: OdcloudConfig,
}

impl OdcloudClient {
    pub fn new(config: OdcloudConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OdcloudConfig {
        &self.config
    }

    fn snapshot_url(&self) -> String {
        format!(
            "{}?page=1&perPage={}&returnType=JSON&serviceKey={}",
            self.config.base_url, self.config.page_size, self.config.service_key
        )
    }
}

#[async_trait]
impl IndustrySource for OdcloudClient {
    async fn fetch_snapshot(&self) -> Result<Vec<IndustryRecord>, UpstreamError> {
        let response = self
            .client
            .get(self.snapshot_url())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else {
                    UpstreamError::Unreachable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        let snapshot: Snapshot = response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        tracing::debug!(rows = snapshot.data.len(), "fetched upstream snapshot");
        Ok(snapshot.data)
    }
}
