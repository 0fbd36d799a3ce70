use thiserror::Error;

/// Failures talking to the content store.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content store returned status {0}")]
    Status(u16),
    #[error("unexpected content store payload: {0}")]
    Decode(String),
    #[error("public role not found in the content store")]
    MissingPublicRole,
    #[error("permission record not found for action {0}")]
    MissingPermission(String),
}

pub type CmsResult<T> = Result<T, CmsError>;
