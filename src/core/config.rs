//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Com Laude API client configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Startup configuration for the API client.
///
/// Seeds the settings store and execution policy; both are mutable at
/// runtime through the `configure_api` tool.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Com Laude API. Defaults to the production endpoint.
    pub base_url: Option<String>,

    /// API key used for bearer authentication.
    pub api_key: Option<String>,

    /// Default request timeout in seconds.
    pub timeout_secs: f64,

    /// Maximum retries after the first attempt.
    pub max_retries: u32,

    /// Base backoff in seconds for the exponential retry schedule.
    pub backoff_factor: f64,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("backoff_factor", &self.backoff_factor)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: 30.0,
            max_retries: 3,
            backoff_factor: 0.5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "comlaude-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server/logging variables use the `MCP_` prefix; API client
    /// variables use `COMLAUDE_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("COMLAUDE_BASE_URL") {
            config.api.base_url = Some(base_url);
        }

        if let Ok(api_key) = std::env::var("COMLAUDE_API_KEY") {
            config.api.api_key = Some(api_key);
            info!("API key loaded from environment");
        } else {
            warn!(
                "COMLAUDE_API_KEY not set - API tools will fail until \
                 configure_api is called with a key"
            );
        }

        if let Some(timeout) = env_parse::<f64>("COMLAUDE_TIMEOUT_SECS") {
            config.api.timeout_secs = timeout;
        }
        if let Some(retries) = env_parse::<u32>("COMLAUDE_MAX_RETRIES") {
            config.api.max_retries = retries;
        }
        if let Some(backoff) = env_parse::<f64>("COMLAUDE_BACKOFF_FACTOR") {
            config.api.backoff_factor = backoff;
        }

        config
    }
}

/// Parse an environment variable, warning on malformed values.
fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring malformed {name}={raw:?}");
            None
        }
    }
}
