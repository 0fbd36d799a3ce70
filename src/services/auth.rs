//! Login and e-mail verification against the external auth backend.

use validator::Validate;

use crate::auth::AuthApi;
use crate::forms::auth::{LoginForm, VerifyEmailForm};
use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

/// Exchanges credentials for a session user.
pub async fn login<A: AuthApi>(api: &A, form: &LoginForm) -> ServiceResult<AuthenticatedUser> {
    if form.validate().is_err() {
        return Err(ServiceError::Form(
            "Veuillez renseigner un e-mail valide et un mot de passe d'au moins 8 caractères."
                .to_string(),
        ));
    }

    let email = form.email.trim().to_lowercase();
    let token = api.login(&email, &form.password).await.map_err(|err| {
        if err.is_rejection() {
            ServiceError::Form("E-mail ou mot de passe incorrect.".to_string())
        } else {
            log::error!("Login against the auth backend failed: {err}");
            ServiceError::Auth(err)
        }
    })?;

    Ok(AuthenticatedUser {
        email,
        token: token.access_token,
    })
}

/// Submits an e-mail verification code.
///
/// The code is correct exactly when the backend accepts it; a rejected code
/// is the only incorrect-code branch.
pub async fn verify_email<A: AuthApi>(api: &A, form: &VerifyEmailForm) -> ServiceResult<()> {
    if form.validate().is_err() {
        return Err(ServiceError::Form(
            "Le code de vérification comporte 6 chiffres.".to_string(),
        ));
    }

    api.verify_email(form.code.trim()).await.map_err(|err| {
        if err.is_rejection() {
            ServiceError::Form(
                "Code de vérification incorrect. Veuillez vérifier vos e-mails ou renvoyer \
                 le code et réessayer."
                    .to_string(),
            )
        } else {
            log::error!("E-mail verification against the auth backend failed: {err}");
            ServiceError::Auth(err)
        }
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::auth::mock::MockAuth;
    use crate::auth::{AuthError, TokenResponse};

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            next: None,
        }
    }

    #[actix_web::test]
    async fn login_normalizes_the_email_and_keeps_the_token() {
        let mut api = MockAuth::new();
        api.expect_login()
            .withf(|email, password| email == "trader@example.com" && password == "s3cret-pass")
            .times(1)
            .returning(|_, _| {
                Ok(TokenResponse {
                    access_token: "token-123".to_string(),
                    token_type: "bearer".to_string(),
                })
            });

        let user = login(&api, &login_form(" Trader@Example.COM ", "s3cret-pass"))
            .await
            .expect("login should succeed");

        assert_eq!(user.email, "trader@example.com");
        assert_eq!(user.token, "token-123");
    }

    #[actix_web::test]
    async fn invalid_form_never_reaches_the_backend() {
        let mut api = MockAuth::new();
        api.expect_login().times(0);

        let result = login(&api, &login_form("not-an-email", "s3cret-pass")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn rejected_credentials_surface_a_form_error() {
        let mut api = MockAuth::new();
        api.expect_login()
            .times(1)
            .returning(|_, _| Err(AuthError::Status(401)));

        let result = login(&api, &login_form("trader@example.com", "s3cret-pass")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    /// An accepted code is the success branch; only a backend rejection is
    /// the incorrect-code branch.
    #[actix_web::test]
    async fn accepted_code_verifies() {
        let mut api = MockAuth::new();
        api.expect_verify_email()
            .withf(|token| token == "128734")
            .times(1)
            .returning(|_| Ok(()));

        let form = VerifyEmailForm {
            code: "128734".to_string(),
        };
        verify_email(&api, &form).await.expect("code is accepted");
    }

    #[actix_web::test]
    async fn rejected_code_surfaces_a_form_error() {
        let mut api = MockAuth::new();
        api.expect_verify_email()
            .times(1)
            .returning(|_| Err(AuthError::Status(400)));

        let form = VerifyEmailForm {
            code: "876578".to_string(),
        };
        let result = verify_email(&api, &form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
