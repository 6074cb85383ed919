//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; the shared API context is
//! injected here so concurrent calls all go through the same settings
//! store and executor.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    ConfigureApiTool, GetAccountTool, GetAccountsTool, GetContactsTool, GetDomainTool,
    GetDomainsTool, GetServicesTool, GetSslCertificatesTool, SearchAccountsTool,
    UpdateAccountTool,
};
use crate::domains::api::ApiContext;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<ApiContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetAccountsTool::create_route(ctx.clone()))
        .with_route(GetAccountTool::create_route(ctx.clone()))
        .with_route(UpdateAccountTool::create_route(ctx.clone()))
        .with_route(SearchAccountsTool::create_route(ctx.clone()))
        .with_route(GetDomainsTool::create_route(ctx.clone()))
        .with_route(GetDomainTool::create_route(ctx.clone()))
        .with_route(GetSslCertificatesTool::create_route(ctx.clone()))
        .with_route(GetContactsTool::create_route(ctx.clone()))
        .with_route(GetServicesTool::create_route(ctx.clone()))
        .with_route(ConfigureApiTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ApiConfig;

    struct TestServer {}

    fn test_ctx() -> Arc<ApiContext> {
        Arc::new(ApiContext::from_config(&ApiConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_accounts"));
        assert!(names.contains(&"update_account"));
        assert!(names.contains(&"search_accounts"));
        assert!(names.contains(&"get_domain"));
        assert!(names.contains(&"get_ssl_certificates"));
        assert!(names.contains(&"configure_api"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let ctx = test_ctx();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
