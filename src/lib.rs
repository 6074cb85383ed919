//! Com Laude MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the Com Laude domain management REST API as callable tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, and the main server handler
//! - **domains**: Business logic organized by bounded contexts
//!   - **api**: Settings store and request executor for outbound calls
//!   - **tools**: MCP tools mapping onto API operations
//!   - **resources**: Static catalog of the covered API areas
//!
//! # Example
//!
//! ```rust,no_run
//! use comlaude_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Serve over stdio...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
