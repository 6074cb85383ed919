//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the API
//! resource they operate on.

pub mod accounts;
pub mod common;
pub mod configure;
pub mod contacts;
pub mod domains;
pub mod services;
pub mod ssl;

pub use accounts::{
    GetAccountParams, GetAccountTool, GetAccountsParams, GetAccountsTool, SearchAccountsParams,
    SearchAccountsTool, UpdateAccountParams, UpdateAccountTool,
};
pub use configure::{ConfigureApiParams, ConfigureApiTool};
pub use contacts::{GetContactsParams, GetContactsTool};
pub use domains::{GetDomainParams, GetDomainTool, GetDomainsParams, GetDomainsTool};
pub use services::{GetServicesParams, GetServicesTool};
pub use ssl::{GetSslCertificatesParams, GetSslCertificatesTool};
