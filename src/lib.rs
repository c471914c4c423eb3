//! # Carbondash
//!
//! Carbon emissions dashboard: a headless dashboard core plus the proxy
//! API that backs its industry-comparison KPI.
//!
//! ## Modules
//!
//! - [`dashboard`]: emission calculation and chart models with explicit
//!   widget lifecycle
//! - [`client`]: the dashboard-side fetcher for the comparison KPI
//! - [`upstream`]: odcloud.kr snapshot source and the aggregate-row lookup
//! - [`api`]: the proxy endpoint, built with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use carbondash::api::{serve, ApiConfig, AppState};
//! use carbondash::upstream::{OdcloudClient, OdcloudConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(OdcloudClient::new(OdcloudConfig::default())?);
//!     let state = AppState::new(source, ApiConfig::default());
//!     serve(state, &ApiConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod upstream;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use client::{comparison_percent, ClientError, DashboardClient, IndustryKpi, KpiTone};

pub use dashboard::{
    render_dashboard, ChartPalette, ChartSpec, ChartSurface, EmissionBreakdown, EmissionFactors,
    InMemorySurface, RenderedCharts, Theme, UsageInput,
};

pub use upstream::{
    find_total, IndustryRecord, IndustrySource, OdcloudClient, OdcloudConfig, UpstreamError,
    TOTAL_MARKER,
};

pub use config::{Config, ConfigError, LoggingConfig};
