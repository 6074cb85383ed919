//! Resource definitions module.
//!
//! One definition per API area. Each resource describes a slice of the
//! Com Laude API and names the tools that operate on it; the content is
//! static descriptive JSON.

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Get the content for this resource.
    fn content() -> String;
}

fn catalog_entry(area: &str, description: &str, tools: &[&str]) -> String {
    let doc = serde_json::json!({
        "area": area,
        "description": description,
        "tools": tools,
    });
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
}

/// Account management catalog entry.
pub struct AccountsResource;

impl ResourceDefinition for AccountsResource {
    const URI: &'static str = "comlaude://accounts";
    const NAME: &'static str = "Accounts";
    const DESCRIPTION: &'static str = "Com Laude account management";

    fn content() -> String {
        catalog_entry(
            "accounts",
            Self::DESCRIPTION,
            &["get_accounts", "get_account", "update_account", "search_accounts"],
        )
    }
}

/// Domain management catalog entry.
pub struct DomainsResource;

impl ResourceDefinition for DomainsResource {
    const URI: &'static str = "comlaude://domains";
    const NAME: &'static str = "Domains";
    const DESCRIPTION: &'static str = "Domain management and DNS";

    fn content() -> String {
        catalog_entry("domains", Self::DESCRIPTION, &["get_domains", "get_domain"])
    }
}

/// SSL certificate catalog entry.
pub struct SslCertificatesResource;

impl ResourceDefinition for SslCertificatesResource {
    const URI: &'static str = "comlaude://ssl-certificates";
    const NAME: &'static str = "SSL Certificates";
    const DESCRIPTION: &'static str = "SSL certificate management";

    fn content() -> String {
        catalog_entry(
            "ssl-certificates",
            Self::DESCRIPTION,
            &["get_ssl_certificates"],
        )
    }
}

/// Contact management catalog entry.
pub struct ContactsResource;

impl ResourceDefinition for ContactsResource {
    const URI: &'static str = "comlaude://contacts";
    const NAME: &'static str = "Contacts";
    const DESCRIPTION: &'static str = "Contact management";

    fn content() -> String {
        catalog_entry("contacts", Self::DESCRIPTION, &["get_contacts"])
    }
}

/// Service catalog entry.
pub struct ServicesResource;

impl ResourceDefinition for ServicesResource {
    const URI: &'static str = "comlaude://services";
    const NAME: &'static str = "Services";
    const DESCRIPTION: &'static str = "Available services";

    fn content() -> String {
        catalog_entry("services", Self::DESCRIPTION, &["get_services"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_resource_metadata() {
        assert_eq!(AccountsResource::URI, "comlaude://accounts");
        assert_eq!(AccountsResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_content_is_valid_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(&AccountsResource::content()).unwrap();
        assert_eq!(parsed["area"], "accounts");
        assert!(
            parsed["tools"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!("search_accounts"))
        );
    }
}
