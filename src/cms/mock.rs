//! Mock content store gateways for isolating services in tests.

use mockall::mock;

use crate::cms::errors::CmsResult;
use crate::cms::{ContentReader, Permission, PermissionAdmin, Role};
use crate::domain::content::{AboutContent, ContactInfo, HomeContent, ServiceSummary};

mock! {
    pub Cms {}

    impl ContentReader for Cms {
        async fn home_page(&self) -> CmsResult<Option<HomeContent>>;
        async fn about_page(&self) -> CmsResult<Option<AboutContent>>;
        async fn services(&self) -> CmsResult<Vec<ServiceSummary>>;
        async fn contact_page(&self) -> CmsResult<Option<ContactInfo>>;
    }

    impl PermissionAdmin for Cms {
        async fn public_role(&self) -> CmsResult<Option<Role>>;
        async fn find_permission(&self, role_id: i64, action: &str) -> CmsResult<Option<Permission>>;
        async fn set_permission_enabled(&self, permission_id: i64, enabled: bool) -> CmsResult<()>;
    }
}
