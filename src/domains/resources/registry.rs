//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Define it in `definitions/`
//! 2. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    AccountsResource, ContactsResource, DomainsResource, ResourceDefinition,
    ServicesResource, SslCertificatesResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<AccountsResource>(),
        build_resource::<DomainsResource>(),
        build_resource::<SslCertificatesResource>(),
        build_resource::<ContactsResource>(),
        build_resource::<ServicesResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        AccountsResource::URI,
        DomainsResource::URI,
        SslCertificatesResource::URI,
        ContactsResource::URI,
        ServicesResource::URI,
    ]
}
