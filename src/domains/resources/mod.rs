//! Resources domain module.
//!
//! Exposes a static catalog describing the API areas this server covers,
//! so clients can discover which tools belong to which area.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use registry::resource_uris;
pub use service::{ResourceEntry, ResourceService};
