//! Service catalog tools.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{api_error_result, payload_result};
use crate::domains::api::{ApiContext, ApiRequest};

/// Parameters for listing the services available to a group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetServicesParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,
}

/// Tool listing the services available to a group's accounts.
#[derive(Debug, Clone)]
pub struct GetServicesTool;

impl GetServicesTool {
    pub const NAME: &'static str = "get_services";

    pub const DESCRIPTION: &'static str = "Get available services";

    pub async fn execute(params: &GetServicesParams, ctx: &ApiContext) -> CallToolResult {
        // Services hang off the accounts collection in the upstream API.
        let request =
            ApiRequest::get(format!("/groups/{}/accounts/services", params.group_id));

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetServicesParams>(),
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
                let params: GetServicesParams =
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
    fn test_services_params() {
        let params: GetServicesParams = serde_json::from_str(r#"{"group_id": "7"}"#).unwrap();
        assert_eq!(params.group_id, "7");
    }
}
