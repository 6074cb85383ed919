//! Error types and handling for the MCP server.
//!
//! The crate-level error wraps the domain errors that can surface at the
//! composition root; transport-level failures stay in `anyhow` at the
//! binary boundary.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the API client domain (settings or executor).
    #[error("API error: {0}")]
    Api(#[from] crate::domains::api::ApiError),
}
