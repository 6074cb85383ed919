//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Resources
//! are defined in `definitions/` and registered via `registry.rs`.

use std::collections::HashMap;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Static text content for this resource.
    pub content: String,
}

/// Service for managing and accessing resources.
#[derive(Debug)]
pub struct ResourceService {
    /// Registry of available resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with all registered resources.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect();

        Self { resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(&entry.content, uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 5);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("comlaude://domains").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("comlaude://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
