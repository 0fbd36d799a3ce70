//! Gateway to the external auth backend.
//!
//! The site never stores credentials; it exchanges them for a bearer token
//! kept in the visitor's session, and forwards e-mail verification codes.

use serde::Deserialize;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{AuthError, AuthResult};
pub use http::HttpAuth;

/// Token issued by `POST /auth/login`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// The auth operations this site consumes.
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> AuthResult<TokenResponse>;
    /// Submits an e-mail verification code; a rejected code surfaces as a
    /// 4xx [`AuthError::Status`].
    async fn verify_email(&self, token: &str) -> AuthResult<()>;
}
