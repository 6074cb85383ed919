//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Programmatic dispatch of tool calls by name
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;

use super::definitions::{
    ConfigureApiTool, GetAccountTool, GetAccountsTool, GetContactsTool, GetDomainTool,
    GetDomainsTool, GetServicesTool, GetSslCertificatesTool, SearchAccountsTool,
    UpdateAccountTool,
};
use super::definitions::common::tool_error_result;
use super::error::ToolError;
use crate::domains::api::ApiContext;

/// Tool registry - manages all available tools.
///
/// The rmcp router handles protocol-level routing; this registry is the
/// dispatch boundary for callers holding a `(name, arguments)` pair. Every
/// error class is converted into a structured error payload here - a raw
/// error never escapes to the transport layer.
pub struct ToolRegistry {
    ctx: Arc<ApiContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetAccountsTool::NAME,
            GetAccountTool::NAME,
            UpdateAccountTool::NAME,
            SearchAccountsTool::NAME,
            GetDomainsTool::NAME,
            GetDomainTool::NAME,
            GetSslCertificatesTool::NAME,
            GetContactsTool::NAME,
            GetServicesTool::NAME,
            ConfigureApiTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the available tool catalog.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetAccountsTool::to_tool(),
            GetAccountTool::to_tool(),
            UpdateAccountTool::to_tool(),
            SearchAccountsTool::to_tool(),
            GetDomainsTool::to_tool(),
            GetDomainTool::to_tool(),
            GetSslCertificatesTool::to_tool(),
            GetContactsTool::to_tool(),
            GetServicesTool::to_tool(),
            ConfigureApiTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn dispatch(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        match name {
            GetAccountsTool::NAME => match parse(arguments) {
                Ok(params) => GetAccountsTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetAccountTool::NAME => match parse(arguments) {
                Ok(params) => GetAccountTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            UpdateAccountTool::NAME => match parse(arguments) {
                Ok(params) => UpdateAccountTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            SearchAccountsTool::NAME => match parse(arguments) {
                Ok(params) => SearchAccountsTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetDomainsTool::NAME => match parse(arguments) {
                Ok(params) => GetDomainsTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetDomainTool::NAME => match parse(arguments) {
                Ok(params) => GetDomainTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetSslCertificatesTool::NAME => match parse(arguments) {
                Ok(params) => GetSslCertificatesTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetContactsTool::NAME => match parse(arguments) {
                Ok(params) => GetContactsTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            GetServicesTool::NAME => match parse(arguments) {
                Ok(params) => GetServicesTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            ConfigureApiTool::NAME => match parse(arguments) {
                Ok(params) => ConfigureApiTool::execute(&params, &self.ctx).await,
                Err(err) => tool_error_result(&err),
            },
            _ => tool_error_result(&ToolError::not_found(name)),
        }
    }
}

fn parse<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use rmcp::model::RawContent;

    fn test_registry() -> ToolRegistry {
        let ctx = ApiContext::from_config(&ApiConfig::default()).unwrap();
        ToolRegistry::new(Arc::new(ctx))
    }

    fn result_json(result: &CallToolResult) -> serde_json::Value {
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"get_accounts"));
        assert!(names.contains(&"get_account"));
        assert!(names.contains(&"update_account"));
        assert!(names.contains(&"search_accounts"));
        assert!(names.contains(&"get_domains"));
        assert!(names.contains(&"get_domain"));
        assert!(names.contains(&"get_ssl_certificates"));
        assert!(names.contains(&"get_contacts"));
        assert!(names.contains(&"get_services"));
        assert!(names.contains(&"configure_api"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = test_registry();
        let result = registry.dispatch("frobnicate", serde_json::json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_json(&result)["error"]["type"], "unknown_tool");
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments() {
        let registry = test_registry();
        // group_id is required
        let result = registry.dispatch("get_accounts", serde_json::json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_json(&result)["error"]["type"], "invalid_arguments");
    }

    #[tokio::test]
    async fn test_dispatch_unconfigured_client() {
        let registry = test_registry();
        let result = registry
            .dispatch("get_accounts", serde_json::json!({"group_id": "1"}))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_json(&result)["error"]["type"],
            "configuration_error"
        );
    }

    #[tokio::test]
    async fn test_dispatch_configure_api() {
        let registry = test_registry();
        let result = registry
            .dispatch(
                "configure_api",
                serde_json::json!({"api_key": "k", "base_url": "https://example.com"}),
            )
            .await;
        assert_ne!(result.is_error, Some(true));
    }
}
