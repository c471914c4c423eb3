//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. The
//! upstream service key is read here once at process start; it never
//! appears as a source literal.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub upstream: UpstreamSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream statistics API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// odcloud.kr service key; also settable via CARBONDASH_SERVICE_KEY
    #[serde(default)]
    pub service_key: String,

    /// Rows per fetch; sized above the dataset's row count so one call
    /// covers the whole snapshot
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_upstream_url() -> String {
    "https://api.odcloud.kr/api/15017225/v1/uddi:bb1a2735-6f3d-44d9-bd36-a3d717d4af8e".to_string()
}

fn default_page_size() -> u32 {
    300
}

fn default_upstream_timeout() -> u64 {
    10_000
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            service_key: String::new(),
            page_size: default_page_size(),
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// Dashboard-side defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// Proxy base URL the comparison client talks to
    #[serde(default = "default_proxy_base")]
    pub proxy_base_url: String,

    /// Industry preselected in the settings picklist
    #[serde(default = "default_industry")]
    pub default_industry: String,
}

fn default_proxy_base() -> String {
    "http://localhost:3000".to_string()
}

fn default_industry() -> String {
    "B.광업".to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            proxy_base_url: default_proxy_base(),
            default_industry: default_industry(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("carbondash").join("config.toml")),
            Some(PathBuf::from("/etc/carbondash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("CARBONDASH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("CARBONDASH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(url) = std::env::var("CARBONDASH_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(key) = std::env::var("CARBONDASH_SERVICE_KEY") {
            self.upstream.service_key = key;
        }

        if let Ok(level) = std::env::var("CARBONDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CARBONDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Carbondash Configuration
#
# Environment variables override these settings:
# - CARBONDASH_API_HOST
# - CARBONDASH_API_PORT
# - CARBONDASH_UPSTREAM_URL
# - CARBONDASH_SERVICE_KEY
# - CARBONDASH_LOG_LEVEL
# - CARBONDASH_LOG_FORMAT

[api]
# Proxy server host
host = "0.0.0.0"

# Proxy server port
port = 3000

[upstream]
# odcloud.kr dataset endpoint
base_url = "https://api.odcloud.kr/api/15017225/v1/uddi:bb1a2735-6f3d-44d9-bd36-a3d717d4af8e"

# Service key issued by odcloud.kr (required for live lookups)
service_key = ""

# Rows per fetch; keep above the dataset's row count
page_size = 300

# Upstream request timeout (ms)
request_timeout_ms = 10000

[dashboard]
# Proxy base URL the comparison client calls
proxy_base_url = "http://localhost:3000"

# Industry preselected in the settings picklist
default_industry = "B.광업"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_settings() {
        let config = Config::default();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.upstream.page_size, 300);
        assert!(config.upstream.service_key.is_empty());
        assert_eq!(config.dashboard.default_industry, "B.광업");
    }

    #[test]
    fn generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("[api]\nport = 8080\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.upstream.page_size, 300);
    }
}
