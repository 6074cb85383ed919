//! Runtime configuration tool.
//!
//! Updates the settings store and the executor's retry policy in one call
//! and reports the resulting effective configuration.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{api_error_result, success_result};
use crate::domains::api::ApiContext;

/// Parameters for configuring the API client.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfigureApiParams {
    #[schemars(description = "Com Laude API key")]
    pub api_key: String,

    #[schemars(description = "API base URL (default: https://api.comlaude.com)")]
    #[serde(default)]
    pub base_url: Option<String>,

    #[schemars(description = "Default request timeout in seconds (must be > 0)")]
    #[serde(default)]
    pub timeout: Option<f64>,

    #[schemars(description = "Maximum retries for transient failures")]
    #[serde(default)]
    pub max_retries: Option<u32>,

    #[schemars(description = "Base backoff in seconds; retry i waits backoff * 2^i")]
    #[serde(default)]
    pub backoff_factor: Option<f64>,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ConfigureApiParamsRedacted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigureApiParams")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.0.base_url)
            .field("timeout", &self.0.timeout)
            .field("max_retries", &self.0.max_retries)
            .field("backoff_factor", &self.0.backoff_factor)
            .finish()
    }
}

struct ConfigureApiParamsRedacted<'a>(&'a ConfigureApiParams);

/// Tool configuring the API client at runtime.
#[derive(Debug, Clone)]
pub struct ConfigureApiTool;

impl ConfigureApiTool {
    pub const NAME: &'static str = "configure_api";

    pub const DESCRIPTION: &'static str = "Configure API client settings";

    pub async fn execute(params: &ConfigureApiParams, ctx: &ApiContext) -> CallToolResult {
        tracing::info!(params = ?ConfigureApiParamsRedacted(params), "configuring API client");

        if let Err(err) = ctx
            .settings
            .update(&params.api_key, params.base_url.as_deref())
            .await
        {
            return api_error_result(&err);
        }

        let policy = match ctx
            .executor
            .update_defaults(params.timeout, params.max_retries, params.backoff_factor)
            .await
        {
            Ok(policy) => policy,
            Err(err) => return api_error_result(&err),
        };

        let base_url = ctx.settings.base_url().await;
        success_result(format!(
            "API client configured with base URL: {base_url} \
             (timeout: {}s, max retries: {}, backoff factor: {})",
            policy.timeout_secs, policy.max_retries, policy.backoff_factor
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConfigureApiParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(ctx: Arc<ApiContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = tcc.arguments.clone().unwrap_or_default();
            async move {
                let params: ConfigureApiParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn test_ctx() -> ApiContext {
        ApiContext::from_config(&ApiConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_configure_updates_settings_and_policy() {
        let ctx = test_ctx();
        let params = ConfigureApiParams {
            api_key: "new_key".to_string(),
            base_url: Some("https://staging.example.com".to_string()),
            timeout: Some(10.0),
            max_retries: Some(1),
            backoff_factor: Some(0.25),
        };

        let result = ConfigureApiTool::execute(&params, &ctx).await;
        assert_ne!(result.is_error, Some(true));

        let text = result_text(&result);
        assert!(text.contains("https://staging.example.com"));
        assert!(!text.contains("new_key"));

        let snapshot = ctx.settings.snapshot().await.unwrap();
        assert_eq!(snapshot.api_key, "new_key");
        let policy = ctx.executor.policy().await;
        assert_eq!(policy.timeout_secs, 10.0);
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.backoff_factor, 0.25);
    }

    #[tokio::test]
    async fn test_configure_rejects_empty_key() {
        let ctx = test_ctx();
        let params = ConfigureApiParams {
            api_key: "  ".to_string(),
            base_url: None,
            timeout: None,
            max_retries: None,
            backoff_factor: None,
        };

        let result = ConfigureApiTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["error"]["type"], "configuration_error");
    }

    #[tokio::test]
    async fn test_configure_rejects_bad_timeout() {
        let ctx = test_ctx();
        let params = ConfigureApiParams {
            api_key: "key".to_string(),
            base_url: None,
            timeout: Some(-1.0),
            max_retries: None,
            backoff_factor: None,
        };

        let result = ConfigureApiTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["error"]["type"], "validation_error");
    }

    #[test]
    fn test_params_only_key_required() {
        let params: ConfigureApiParams =
            serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert!(params.base_url.is_none());
        assert!(params.timeout.is_none());
    }
}
