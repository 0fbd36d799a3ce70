//! reqwest-backed implementation of the auth gateway.

use reqwest::Client;

use crate::auth::errors::{AuthError, AuthResult};
use crate::auth::{AuthApi, TokenResponse};
use crate::models::config::AuthConfig;

/// HTTP client of the auth backend. Cheap to clone.
#[derive(Clone)]
pub struct HttpAuth {
    client: Client,
    base_url: String,
}

impl HttpAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
        }
    }
}

impl AuthApi for HttpAuth {
    async fn login(&self, email: &str, password: &str) -> AuthResult<TokenResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::Status(response.status().as_u16()));
        }
        Ok(response.json::<TokenResponse>().await?)
    }

    async fn verify_email(&self, token: &str) -> AuthResult<()> {
        let url = format!("{}/auth/verify-email", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("token", token)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_covers_client_errors_only() {
        assert!(AuthError::Status(401).is_rejection());
        assert!(AuthError::Status(422).is_rejection());
        assert!(!AuthError::Status(500).is_rejection());
        assert!(!AuthError::Status(302).is_rejection());
    }
}
