use serde::Deserialize;
use validator::Validate;

/// Credentials form on the login page.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Veuillez renseigner un e-mail valide."))]
    pub email: String,
    #[validate(length(min = 8, message = "Le mot de passe doit contenir au moins 8 caractères."))]
    pub password: String,
    /// Where to send the visitor after a successful login.
    #[serde(default)]
    pub next: Option<String>,
}

/// Code form on the e-mail verification page.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailForm {
    #[validate(length(min = 6, max = 6, message = "Le code de vérification comporte 6 chiffres."))]
    pub code: String,
}

/// Hidden form behind the theme toggle button.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    /// Path to return to after toggling.
    #[serde(default)]
    pub next: Option<String>,
}
