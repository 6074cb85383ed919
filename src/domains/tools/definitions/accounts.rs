//! Account management tools.
//!
//! List, fetch, update, and search accounts within a group. Pagination and
//! sorting travel as query parameters; search filters travel in the
//! request body, matching the API's conventions.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{api_error_result, default_limit, default_page, payload_result};
use crate::domains::api::{ApiContext, ApiRequest};

/// Parameters for listing accounts in a group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAccountsParams {
    /// The group whose accounts are listed.
    #[schemars(description = "Group ID to get accounts for")]
    pub group_id: String,

    #[schemars(description = "Maximum number of results (default: 50)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Tool listing the accounts of a group.
#[derive(Debug, Clone)]
pub struct GetAccountsTool;

impl GetAccountsTool {
    pub const NAME: &'static str = "get_accounts";

    pub const DESCRIPTION: &'static str = "Get list of accounts for a group";

    pub async fn execute(params: &GetAccountsParams, ctx: &ApiContext) -> CallToolResult {
        let request = ApiRequest::get(format!("/groups/{}/accounts", params.group_id))
            .query("limit", params.limit)
            .query("page", params.page);

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAccountsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(ctx: Arc<ApiContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = tcc.arguments.clone().unwrap_or_default();
            async move {
                let params: GetAccountsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for fetching a single account.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAccountParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,

    #[schemars(description = "Account ID")]
    pub account_id: String,
}

/// Tool fetching the details of one account.
#[derive(Debug, Clone)]
pub struct GetAccountTool;

impl GetAccountTool {
    pub const NAME: &'static str = "get_account";

    pub const DESCRIPTION: &'static str = "Get details for a specific account";

    pub async fn execute(params: &GetAccountParams, ctx: &ApiContext) -> CallToolResult {
        let request = ApiRequest::get(format!(
            "/groups/{}/accounts/{}",
            params.group_id, params.account_id
        ));

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAccountParams>(),
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
                let params: GetAccountParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for updating an account.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAccountParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,

    #[schemars(description = "Account ID")]
    pub account_id: String,

    /// Passed through to the API unmodified.
    #[schemars(description = "Account fields to update")]
    pub updates: serde_json::Value,
}

/// Tool updating account fields via PATCH.
#[derive(Debug, Clone)]
pub struct UpdateAccountTool;

impl UpdateAccountTool {
    pub const NAME: &'static str = "update_account";

    pub const DESCRIPTION: &'static str = "Update account information";

    pub async fn execute(params: &UpdateAccountParams, ctx: &ApiContext) -> CallToolResult {
        let request = ApiRequest::patch(format!(
            "/groups/{}/accounts/{}",
            params.group_id, params.account_id
        ))
        .body(params.updates.clone());

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateAccountParams>(),
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
                let params: UpdateAccountParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for searching accounts with filters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAccountsParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,

    /// Sent in the request body, not the query string.
    #[schemars(description = "Search filters to be sent in request body")]
    #[serde(default)]
    pub filters: Option<serde_json::Value>,

    #[schemars(description = "Maximum number of results (default: 50)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Sort field (with - prefix for descending)")]
    #[serde(default)]
    pub sort: Option<String>,

    #[schemars(description = "Comma-separated list of fields to return")]
    #[serde(default)]
    pub fields: Option<String>,
}

/// Tool searching accounts via the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchAccountsTool;

impl SearchAccountsTool {
    pub const NAME: &'static str = "search_accounts";

    pub const DESCRIPTION: &'static str = "Search accounts with filters";

    pub async fn execute(params: &SearchAccountsParams, ctx: &ApiContext) -> CallToolResult {
        let mut request =
            ApiRequest::post(format!("/groups/{}/accounts/search", params.group_id))
                .query("limit", params.limit)
                .query("page", params.page);

        if let Some(sort) = params.sort.as_deref().filter(|s| !s.is_empty()) {
            request = request.query("sort", sort);
        }
        if let Some(fields) = params.fields.as_deref().filter(|f| !f.is_empty()) {
            request = request.query("fields", fields);
        }

        let filters = params
            .filters
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        request = request.body(filters);

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchAccountsParams>(),
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
                let params: SearchAccountsParams =
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

    #[test]
    fn test_get_accounts_params_defaults() {
        let json = r#"{"group_id": "42"}"#;
        let params: GetAccountsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit, 50);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_get_accounts_params_custom() {
        let json = r#"{"group_id": "42", "limit": 10, "page": 3}"#;
        let params: GetAccountsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.page, 3);
    }

    #[test]
    fn test_get_account_params_required_fields() {
        let missing: Result<GetAccountParams, _> =
            serde_json::from_str(r#"{"group_id": "42"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_search_params_optional_fields() {
        let json = r#"{"group_id": "42"}"#;
        let params: SearchAccountsParams = serde_json::from_str(json).unwrap();
        assert!(params.filters.is_none());
        assert!(params.sort.is_none());
        assert!(params.fields.is_none());

        let json = r#"{"group_id": "42", "filters": {"status": "active"}, "sort": "-name"}"#;
        let params: SearchAccountsParams = serde_json::from_str(json).unwrap();
        assert_eq!(
            params.filters,
            Some(serde_json::json!({"status": "active"}))
        );
        assert_eq!(params.sort.as_deref(), Some("-name"));
    }

    #[test]
    fn test_update_params_pass_body_through() {
        let json = r#"{"group_id": "1", "account_id": "2", "updates": {"name": "n"}}"#;
        let params: UpdateAccountParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.updates, serde_json::json!({"name": "n"}));
    }
}
