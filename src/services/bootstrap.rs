//! One-time startup provisioning of public read permissions.
//!
//! For each managed content type the anonymous role must be able to list and
//! fetch single documents, otherwise every page falls back to its defaults.
//! Each action is enabled independently: one failure is recorded and the
//! loop continues, so a broken permission record cannot block the rest.

use crate::cms::{CmsError, PermissionAdmin};
use crate::services::{ServiceError, ServiceResult};

/// Content types whose read actions are opened to the public role, in order.
pub const CONTENT_TYPES: [&str; 4] = [
    "api::page-accueil.page-accueil",
    "api::page-a-propos.page-a-propos",
    "api::service.service",
    "api::page-contact.page-contact",
];

/// The two read actions enabled per content type.
const READ_ACTIONS: [&str; 2] = ["find", "findOne"];

/// What the bootstrap managed to enable.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub enabled: Vec<String>,
    pub failed: Vec<String>,
}

impl BootstrapReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Enables the public read actions for every content type.
///
/// Idempotent: re-running writes `enabled = true` over records that already
/// hold it, which the store treats as a no-op. Only a failure to resolve the
/// public role itself aborts, since no update can be keyed without it.
pub async fn configure_public_permissions<A: PermissionAdmin>(
    admin: &A,
    content_types: &[&str],
) -> ServiceResult<BootstrapReport> {
    let role = admin
        .public_role()
        .await?
        .ok_or(ServiceError::Cms(CmsError::MissingPublicRole))?;

    let mut report = BootstrapReport::default();
    for content_type in content_types {
        for action_suffix in READ_ACTIONS {
            let action = format!("{content_type}.{action_suffix}");
            match enable_action(admin, role.id, &action).await {
                Ok(()) => report.enabled.push(action),
                Err(err) => {
                    log::error!("Failed to enable {action} for the public role: {err}");
                    report.failed.push(action);
                }
            }
        }
    }

    if report.is_complete() {
        log::info!(
            "Public permissions configured for {} content types",
            content_types.len()
        );
    } else {
        log::warn!(
            "Public permissions incomplete; not enabled: {}",
            report.failed.join(", ")
        );
    }

    Ok(report)
}

async fn enable_action<A: PermissionAdmin>(
    admin: &A,
    role_id: i64,
    action: &str,
) -> Result<(), CmsError> {
    let permission = admin
        .find_permission(role_id, action)
        .await?
        .ok_or_else(|| CmsError::MissingPermission(action.to_string()))?;
    admin.set_permission_enabled(permission.id, true).await
}
