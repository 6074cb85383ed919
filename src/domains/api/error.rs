//! Classified error taxonomy for outbound API calls.
//!
//! Every failure the executor can produce is tagged with a kind so callers
//! can branch on the classification instead of parsing message text.

use thiserror::Error;

/// A specialized Result type for API client operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while configuring or calling the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid API key / base URL. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid call parameters (non-positive timeout, negative backoff).
    /// Raised before any network attempt.
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP 401 from the API. Credentials are treated as permanently
    /// invalid for the call, so this is never retried.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// HTTP 429 on every attempt until the retry budget ran out.
    #[error("Rate limit exceeded after {attempts} attempt(s)")]
    RateLimitExhausted { attempts: u32 },

    /// Any other non-2xx HTTP status. Not retried.
    #[error("HTTP {status} error: {message}")]
    Http { status: u16, message: String },

    /// Connection, DNS, or timeout failure after retries were exhausted.
    #[error("Network error: {0}")]
    Network(String),

    /// The retry loop exited without a terminal outcome. Should not occur.
    #[error("Execution error: {0}")]
    Execution(String),
}

impl ApiError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a new execution error.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Classification tag used in structured error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::Validation(_) => "validation_error",
            Self::Authentication(_) => "authentication_error",
            Self::RateLimitExhausted { .. } => "rate_limit_exhausted",
            Self::Http { .. } => "http_error",
            Self::Network(_) => "network_error",
            Self::Execution(_) => "execution_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            ApiError::configuration("x").kind(),
            "configuration_error"
        );
        assert_eq!(ApiError::validation("x").kind(), "validation_error");
        assert_eq!(
            ApiError::authentication("x").kind(),
            "authentication_error"
        );
        assert_eq!(
            ApiError::RateLimitExhausted { attempts: 4 }.kind(),
            "rate_limit_exhausted"
        );
        assert_eq!(
            ApiError::Http {
                status: 404,
                message: "not found".to_string()
            }
            .kind(),
            "http_error"
        );
        assert_eq!(
            ApiError::Network("refused".to_string()).kind(),
            "network_error"
        );
    }

    #[test]
    fn test_http_error_display_carries_status() {
        let err = ApiError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
