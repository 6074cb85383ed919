//! API client domain: settings store and request executor.
//!
//! This is the outbound side of the server. The settings store guards the
//! mutable base URL and API key; the executor performs the actual HTTP
//! calls with timeout, retry, and error classification.

mod error;
mod executor;
mod settings;

pub use error::{ApiError, ApiResult};
pub use executor::{
    ApiRequest, ExecutionPolicy, MAX_BACKOFF, Payload, RequestExecutor, backoff_delay,
};
pub use settings::{ApiSettings, ApiSnapshot, DEFAULT_BASE_URL};

use crate::core::config::ApiConfig;

/// Shared API client state injected into the tool router.
///
/// One instance per process, wired at the composition root.
#[derive(Debug)]
pub struct ApiContext {
    pub settings: ApiSettings,
    pub executor: RequestExecutor,
}

impl ApiContext {
    /// Build the settings store and executor from startup configuration.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let settings = ApiSettings::from_config(config)?;
        let executor =
            RequestExecutor::new(settings.clone(), ExecutionPolicy::from_config(config));
        Ok(Self { settings, executor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_shares_settings_with_executor() {
        let ctx = ApiContext::from_config(&ApiConfig::default()).unwrap();
        ctx.settings
            .update("key", Some("https://example.com"))
            .await
            .unwrap();

        // The executor reads through the same store.
        let snapshot = ctx.settings.snapshot().await.unwrap();
        assert_eq!(snapshot.base_url.as_str(), "https://example.com/");
    }
}
