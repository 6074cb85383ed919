//! Request executor with timeout enforcement and bounded retry.
//!
//! Performs one logical outbound call per `execute` invocation. Transient
//! failures (HTTP 429, network errors) are retried with exponential
//! backoff; everything else is classified and returned immediately.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url, header};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::error::{ApiError, ApiResult};
use super::settings::ApiSettings;
use crate::core::config::ApiConfig;

/// Retry and timeout defaults applied to every call.
///
/// Mutable at runtime via [`RequestExecutor::update_defaults`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionPolicy {
    /// Default request timeout in seconds. Always > 0.
    pub timeout_secs: f64,

    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,

    /// Base backoff in seconds; attempt `i` waits `backoff_factor * 2^i`.
    pub backoff_factor: f64,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            timeout_secs: 30.0,
            max_retries: 3,
            backoff_factor: 0.5,
        }
    }
}

impl ExecutionPolicy {
    /// Build the startup policy from configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
            backoff_factor: config.backoff_factor,
        }
    }
}

/// Descriptor for one outbound call. Constructed and consumed per call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout_override: Option<f64>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            timeout_override: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON request body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the default timeout for this call only.
    pub fn timeout(mut self, secs: f64) -> Self {
        self.timeout_override = Some(secs);
        self
    }
}

/// Decoded response payload, chosen by the declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Render the payload for relaying back to the MCP client.
    pub fn into_display_text(self) -> String {
        match self {
            Self::Json(value) => serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| value.to_string()),
            Self::Text(text) => text,
        }
    }
}

/// Executes outbound calls against the configured API.
///
/// Concurrent calls each own their retry loop; the only shared mutable
/// state is the settings store and the execution policy, both guarded.
#[derive(Debug)]
pub struct RequestExecutor {
    settings: ApiSettings,
    policy: Mutex<ExecutionPolicy>,
    http: Client,
}

impl RequestExecutor {
    pub fn new(settings: ApiSettings, policy: ExecutionPolicy) -> Self {
        Self {
            settings,
            policy: Mutex::new(policy),
            http: Client::new(),
        }
    }

    /// Current policy defaults.
    pub async fn policy(&self) -> ExecutionPolicy {
        *self.policy.lock().await
    }

    /// Update the default timeout/retry policy.
    ///
    /// Validation mirrors the settings store: the whole update is rejected
    /// and the stored policy left unchanged if any field is out of range.
    pub async fn update_defaults(
        &self,
        timeout_secs: Option<f64>,
        max_retries: Option<u32>,
        backoff_factor: Option<f64>,
    ) -> ApiResult<ExecutionPolicy> {
        let mut policy = self.policy.lock().await;
        let mut next = *policy;

        if let Some(timeout) = timeout_secs {
            if !timeout.is_finite() || timeout <= 0.0 {
                return Err(ApiError::validation(
                    "timeout must be greater than zero",
                ));
            }
            next.timeout_secs = timeout;
        }
        if let Some(retries) = max_retries {
            next.max_retries = retries;
        }
        if let Some(backoff) = backoff_factor {
            if !backoff.is_finite() || backoff < 0.0 {
                return Err(ApiError::validation(
                    "backoff factor must not be negative",
                ));
            }
            next.backoff_factor = backoff;
        }

        *policy = next;
        Ok(next)
    }

    /// Perform one logical call: snapshot the configuration, then run the
    /// bounded retry loop until a terminal outcome.
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<Payload> {
        let snapshot = self.settings.snapshot().await?;
        let policy = self.policy().await;

        let timeout_secs = request.timeout_override.unwrap_or(policy.timeout_secs);
        if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
            return Err(ApiError::validation(
                "timeout must be greater than zero",
            ));
        }
        let timeout = Duration::from_secs_f64(timeout_secs);

        let url = snapshot.base_url.join(&request.path).map_err(|e| {
            ApiError::validation(format!("invalid request path {:?}: {e}", request.path))
        })?;

        debug!(method = %request.method, %url, "executing API request");

        // attempt counts from 0; total attempts <= max_retries + 1
        for attempt in 0..=policy.max_retries {
            let mut builder = self
                .http
                .request(request.method.clone(), url.clone())
                .bearer_auth(&snapshot.api_key)
                .header(header::ACCEPT, "application/json")
                .timeout(timeout);
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return decode_payload(response).await;
                    }
                    match status {
                        StatusCode::UNAUTHORIZED => {
                            error!(%url, "authentication rejected (HTTP 401)");
                            return Err(ApiError::authentication(
                                "invalid or missing API key (HTTP 401)",
                            ));
                        }
                        StatusCode::TOO_MANY_REQUESTS => {
                            if attempt < policy.max_retries {
                                self.backoff(&url, attempt, policy, "rate limited").await;
                            } else {
                                error!(%url, attempts = attempt + 1, "rate limit retries exhausted");
                                return Err(ApiError::RateLimitExhausted {
                                    attempts: attempt + 1,
                                });
                            }
                        }
                        _ => {
                            let message = response.text().await.unwrap_or_default();
                            error!(%url, status = status.as_u16(), "API request failed");
                            return Err(ApiError::Http {
                                status: status.as_u16(),
                                message,
                            });
                        }
                    }
                }
                Err(err) => {
                    if attempt < policy.max_retries {
                        self.backoff(&url, attempt, policy, &err.to_string()).await;
                    } else {
                        error!(%url, attempts = attempt + 1, "network failure, retries exhausted: {err}");
                        return Err(ApiError::Network(err.to_string()));
                    }
                }
            }
        }

        Err(ApiError::execution(
            "retry loop exited without a terminal outcome",
        ))
    }

    /// Sleep for the exponential backoff delay of the given attempt.
    async fn backoff(&self, url: &Url, attempt: u32, policy: ExecutionPolicy, reason: &str) {
        let delay = backoff_delay(policy.backoff_factor, attempt);
        warn!(
            %url,
            attempt = attempt + 1,
            max_attempts = policy.max_retries + 1,
            delay_ms = delay.as_millis() as u64,
            "{reason}, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Upper bound on a single retry sleep.
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Backoff delay for retry attempt `attempt` (0-based):
/// `backoff_factor * 2^attempt` seconds, capped at [`MAX_BACKOFF`].
///
/// The exponent is clamped so the product stays finite; anything the
/// Duration conversion still rejects collapses to the cap.
pub fn backoff_delay(backoff_factor: f64, attempt: u32) -> Duration {
    let secs = backoff_factor.max(0.0) * 2f64.powi(attempt.min(64) as i32);
    Duration::try_from_secs_f64(secs)
        .map(|delay| delay.min(MAX_BACKOFF))
        .unwrap_or(MAX_BACKOFF)
}

/// Decode a successful response by its declared content type.
async fn decode_payload(response: reqwest::Response) -> ApiResult<Payload> {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("json"))
        .unwrap_or(false);

    if is_json {
        let value = response.json().await.map_err(|e| {
            ApiError::execution(format!("failed to decode JSON response: {e}"))
        })?;
        Ok(Payload::Json(value))
    } else {
        let text = response.text().await.map_err(|e| {
            ApiError::execution(format!("failed to read response body: {e}"))
        })?;
        Ok(Payload::Text(text))
    }
}
