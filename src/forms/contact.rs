use serde::Deserialize;
use validator::Validate;

/// Message form on the contact page.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Veuillez renseigner votre nom."))]
    pub nom: String,
    #[validate(length(min = 1, message = "Veuillez renseigner votre prénom."))]
    pub prenom: String,
    #[validate(email(message = "Veuillez renseigner un e-mail valide."))]
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[validate(length(min = 1, message = "Veuillez renseigner un sujet."))]
    pub sujet: String,
    #[validate(length(min = 10, message = "Votre message est trop court."))]
    pub message: String,
}
