use thiserror::Error;

use crate::auth::AuthError;
use crate::billing::BillingError;
use crate::cms::CmsError;

pub mod auth;
pub mod bootstrap;
pub mod faq;
pub mod pages;
pub mod payment;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// User-correctable input problem; the message is shown as-is.
    #[error("{0}")]
    Form(String),
    #[error(transparent)]
    Cms(#[from] CmsError),
    #[error(transparent)]
    Billing(#[from] BillingError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
