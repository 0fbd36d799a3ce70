//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Basic configuration shared across handlers.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub secret: String,
    pub templates_dir: String,
    pub assets_dir: String,
    #[serde(default)]
    pub cms: CmsConfig,
    pub billing: BillingConfig,
    pub auth: AuthConfig,
}

/// Location of the content store.
#[derive(Clone, Debug, Deserialize)]
pub struct CmsConfig {
    /// Base URL; falls back to the local development store when unset.
    #[serde(default = "default_cms_url")]
    pub url: String,
    /// Bearer token for the admin-scoped permission collections.
    #[serde(default)]
    pub admin_token: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            url: default_cms_url(),
            admin_token: None,
        }
    }
}

fn default_cms_url() -> String {
    "http://localhost:1337".to_string()
}

/// Location of the billing backend.
#[derive(Clone, Debug, Deserialize)]
pub struct BillingConfig {
    pub url: String,
}

/// Location of the auth backend.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthConfig {
    pub url: String,
}
