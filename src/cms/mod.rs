//! Gateways to the external content store.
//!
//! [`ContentReader`] is the public read surface used by the page services;
//! [`PermissionAdmin`] is the admin-scoped surface used once at startup by
//! the permission bootstrap. Both are traits so services stay testable
//! against mocks.

use serde::Deserialize;

use crate::domain::content::{AboutContent, ContactInfo, HomeContent, ServiceSummary};

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{CmsError, CmsResult};
pub use http::HttpCms;

/// Reads the published content documents. Each call performs exactly one
/// network read; there is no caching and no retry.
pub trait ContentReader {
    async fn home_page(&self) -> CmsResult<Option<HomeContent>>;
    async fn about_page(&self) -> CmsResult<Option<AboutContent>>;
    async fn services(&self) -> CmsResult<Vec<ServiceSummary>>;
    async fn contact_page(&self) -> CmsResult<Option<ContactInfo>>;
}

/// A role record in the content store's permission system.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
}

/// A permission record scoping one action to one role.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Permission {
    pub id: i64,
    pub action: String,
    pub enabled: bool,
}

/// Admin-scoped queries and updates against the store's roles and
/// permissions collections.
pub trait PermissionAdmin {
    /// Looks up the anonymous-access role (`type == "public"`).
    async fn public_role(&self) -> CmsResult<Option<Role>>;
    /// Finds the permission record for an action scoped to a role.
    async fn find_permission(&self, role_id: i64, action: &str) -> CmsResult<Option<Permission>>;
    /// Sets the enabled flag of a permission record. Writing the flag it
    /// already holds is a no-op on the store side.
    async fn set_permission_enabled(&self, permission_id: i64, enabled: bool) -> CmsResult<()>;
}
