//! Contact management tools.

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

/// Parameters for listing contacts in a group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetContactsParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,

    #[schemars(description = "Maximum number of results (default: 50)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Tool listing the contacts of a group.
#[derive(Debug, Clone)]
pub struct GetContactsTool;

impl GetContactsTool {
    pub const NAME: &'static str = "get_contacts";

    pub const DESCRIPTION: &'static str = "Get list of contacts";

    pub async fn execute(params: &GetContactsParams, ctx: &ApiContext) -> CallToolResult {
        let request = ApiRequest::get(format!("/groups/{}/contacts", params.group_id))
            .query("limit", params.limit)
            .query("page", params.page);

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetContactsParams>(),
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
                let params: GetContactsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
