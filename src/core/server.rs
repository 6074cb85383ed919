//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router and resource
//! reads to the resource service.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter,
    model::*, service::RequestContext, tool_handler,
};
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    api::ApiContext,
    resources::ResourceService,
    tools::build_tool_router,
};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and holds the shared
/// API context injected into every tool route.
#[derive(Clone, Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared API client state (settings store + executor).
    api: Arc<ApiContext>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the seeded API configuration is invalid (malformed base
    /// URL from the environment).
    pub fn new(config: Config) -> super::error::Result<Self> {
        let api = Arc::new(ApiContext::from_config(&config.api)?);
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new());

        Ok(Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            config,
            api,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared API context (for programmatic dispatch and tests).
    pub fn api(&self) -> &Arc<ApiContext> {
        &self.api
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                title: None,
                version: self.config.server.version.clone(),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Provides access to Com Laude's domain management, SSL, and account \
                 services. Call configure_api first if no API key was set at startup."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "comlaude-api");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_server_rejects_malformed_base_url() {
        let mut config = Config::default();
        config.api.base_url = Some("not-a-url".to_string());
        let err = McpServer::new(config).unwrap_err();
        assert!(matches!(err, crate::core::Error::Api(_)));
    }

    #[test]
    fn test_router_has_all_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.tool_router.list_all().len(), 10);
    }
}
