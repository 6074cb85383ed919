//! Tools domain module.
//!
//! Each tool maps one MCP operation onto one remote API call (or, for
//! `configure_api`, onto the local settings store).
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by API resource
//! - `router.rs` - Dynamic ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool registry and programmatic dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define params, `execute()`, `to_tool()`, and `create_route()` in a
//!    file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
