//! Settings store for the API client.
//!
//! Holds the mutable base URL and API key behind an async mutex so that
//! concurrent tool calls always see a consistent snapshot and updates are
//! atomic. The guard is held only for the duration of a read or update,
//! never across a network call.

use std::sync::Arc;

use reqwest::Url;
use tokio::sync::Mutex;
use tracing::info;

use super::error::{ApiError, ApiResult};
use crate::core::config::ApiConfig;

/// Default base URL for the Com Laude API.
pub const DEFAULT_BASE_URL: &str = "https://api.comlaude.com";

/// An immutable, atomically-read copy of the stored configuration.
#[derive(Debug, Clone)]
pub struct ApiSnapshot {
    pub base_url: Url,
    pub api_key: String,
}

#[derive(Debug)]
struct SettingsState {
    base_url: Url,
    api_key: Option<String>,
}

/// Shared handle to the API client settings.
///
/// Cloning is cheap; all clones observe the same underlying state.
#[derive(Clone, Debug)]
pub struct ApiSettings {
    state: Arc<Mutex<SettingsState>>,
}

impl ApiSettings {
    /// Create a settings store with the default base URL and no API key.
    pub fn new() -> Self {
        let base_url =
            Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self {
            state: Arc::new(Mutex::new(SettingsState {
                base_url,
                api_key: None,
            })),
        }
    }

    /// Create a settings store seeded from startup configuration.
    ///
    /// A malformed configured base URL fails startup; a blank configured
    /// key is treated as unset, and tool calls surface the missing key as
    /// a configuration error when they first need a snapshot.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = match config.base_url.as_deref() {
            Some(raw) => parse_base_url(raw)?,
            None => Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        };
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from);
        if api_key.is_some() {
            info!("API key seeded from startup configuration");
        }
        Ok(Self {
            state: Arc::new(Mutex::new(SettingsState { base_url, api_key })),
        })
    }

    /// Atomically replace the stored API key, and base URL if provided.
    ///
    /// The guard is held for the whole read-validate-write sequence; on any
    /// validation failure the stored state is left unchanged.
    pub async fn update(&self, api_key: &str, base_url: Option<&str>) -> ApiResult<()> {
        let mut state = self.state.lock().await;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ApiError::configuration("API key must not be empty"));
        }

        let new_base_url = match base_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => Some(parse_base_url(raw)?),
            None => None,
        };

        state.api_key = Some(api_key.to_string());
        if let Some(url) = new_base_url {
            state.base_url = url;
        }
        info!(base_url = %state.base_url, "API client settings updated");
        Ok(())
    }

    /// Return an immutable copy of the current configuration.
    ///
    /// Fails if no API key has ever been set.
    pub async fn snapshot(&self) -> ApiResult<ApiSnapshot> {
        let state = self.state.lock().await;
        let api_key = state.api_key.clone().ok_or_else(|| {
            ApiError::configuration(
                "API client not configured: set COMLAUDE_API_KEY or call configure_api",
            )
        })?;
        Ok(ApiSnapshot {
            base_url: state.base_url.clone(),
            api_key,
        })
    }

    /// Current base URL, regardless of whether an API key is set.
    pub async fn base_url(&self) -> Url {
        self.state.lock().await.base_url.clone()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and validate a base URL: it must carry a scheme and a host.
fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ApiError::configuration(format!("invalid base URL {raw:?}: {e}")))?;
    if !url.has_host() {
        return Err(ApiError::configuration(format!(
            "invalid base URL {raw:?}: missing host"
        )));
    }
    Ok(url)
}
