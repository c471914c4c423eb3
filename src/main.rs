//! Carbondash Proxy Server
//!
//! Run with: cargo run --bin carbondash-api
//!
//! The process takes no flags; configuration comes from the config file
//! and `CARBONDASH_*` environment variables (see `config.rs`).

use std::sync::Arc;

use carbondash::api::{serve, ApiConfig, AppState};
use carbondash::config::Config;
use carbondash::upstream::{OdcloudClient, OdcloudConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting carbondash proxy v{}", env!("CARGO_PKG_VERSION"));

    if config.upstream.service_key.is_empty() {
        tracing::warn!(
            "upstream service key is empty; live lookups will fail \
             (set CARBONDASH_SERVICE_KEY or [upstream].service_key)"
        );
    }

    let source = Arc::new(OdcloudClient::new(OdcloudConfig {
        base_url: config.upstream.base_url.clone(),
        service_key: config.upstream.service_key.clone(),
        page_size: config.upstream.page_size,
        request_timeout_ms: config.upstream.request_timeout_ms,
    })?);

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(source, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("carbondash proxy stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("carbondash={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
