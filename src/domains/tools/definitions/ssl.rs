//! SSL certificate tools.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{api_error_result, default_limit, payload_result};
use crate::domains::api::{ApiContext, ApiRequest};

/// Parameters for listing SSL certificates in a group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSslCertificatesParams {
    #[schemars(description = "Group ID")]
    pub group_id: String,

    #[schemars(description = "Maximum number of results (default: 50)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Tool listing the SSL certificates of a group.
#[derive(Debug, Clone)]
pub struct GetSslCertificatesTool;

impl GetSslCertificatesTool {
    pub const NAME: &'static str = "get_ssl_certificates";

    pub const DESCRIPTION: &'static str = "Get list of SSL certificates";

    pub async fn execute(
        params: &GetSslCertificatesParams,
        ctx: &ApiContext,
    ) -> CallToolResult {
        let request =
            ApiRequest::get(format!("/groups/{}/ssl-certificates", params.group_id))
                .query("limit", params.limit);

        match ctx.executor.execute(request).await {
            Ok(payload) => payload_result(payload),
            Err(err) => api_error_result(&err),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSslCertificatesParams>(),
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
                let params: GetSslCertificatesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
