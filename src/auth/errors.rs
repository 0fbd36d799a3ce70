use thiserror::Error;

/// Failures talking to the auth backend.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth backend returned status {0}")]
    Status(u16),
}

impl AuthError {
    /// True when the backend explicitly rejected the credentials or code, as
    /// opposed to being unreachable or broken.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Status(status) if (400..500).contains(status))
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
