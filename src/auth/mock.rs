//! Mock auth gateway for isolating services in tests.

use mockall::mock;

use crate::auth::errors::AuthResult;
use crate::auth::{AuthApi, TokenResponse};

mock! {
    pub Auth {}

    impl AuthApi for Auth {
        async fn login(&self, email: &str, password: &str) -> AuthResult<TokenResponse>;
        async fn verify_email(&self, token: &str) -> AuthResult<()>;
    }
}
