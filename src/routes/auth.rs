use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::auth::HttpAuth;
use crate::forms::auth::{LoginForm, VerifyEmailForm};
use crate::routes::{
    USER_SESSION_KEY, page_context, redirect, render_template, safe_next, session_user,
};
use crate::services::auth as auth_service;
use crate::services::ServiceError;

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

#[get("/connexion")]
pub async fn show_login(
    req: HttpRequest,
    params: web::Query<LoginPageQuery>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if session_user(&session).is_some() {
        return redirect("/");
    }

    let mut context = page_context(&req, "connexion", &session, &flash_messages);
    context.insert("next", &params.next);

    render_template(&tera, "auth/login.html", &context)
}

#[post("/connexion")]
pub async fn login(
    session: Session,
    web::Form(form): web::Form<LoginForm>,
    auth: web::Data<HttpAuth>,
) -> impl Responder {
    let next = safe_next(form.next.as_deref(), "/");

    match auth_service::login(auth.get_ref(), &form).await {
        Ok(user) => {
            session.renew();
            if let Err(err) = session.insert(USER_SESSION_KEY, &user) {
                log::error!("Failed to store the session user: {err}");
                FlashMessage::error(
                    "Connexion impossible pour le moment. Veuillez réessayer.".to_string(),
                )
                .send();
                return redirect("/connexion");
            }
            FlashMessage::success("Connexion réussie.".to_string()).send();
            redirect(&next)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/connexion")
        }
        Err(err) => {
            log::error!("Login failed: {err}");
            FlashMessage::error(
                "Connexion impossible pour le moment. Veuillez réessayer.".to_string(),
            )
            .send();
            redirect("/connexion")
        }
    }
}

#[post("/deconnexion")]
pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    FlashMessage::info("Vous êtes déconnecté.".to_string()).send();
    redirect("/")
}

#[get("/verification-email")]
pub async fn show_verify_email(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = page_context(&req, "verification-email", &session, &flash_messages);

    render_template(&tera, "auth/verify_email.html", &context)
}

#[post("/verification-email")]
pub async fn verify_email(
    web::Form(form): web::Form<VerifyEmailForm>,
    auth: web::Data<HttpAuth>,
) -> impl Responder {
    match auth_service::verify_email(auth.get_ref(), &form).await {
        Ok(()) => {
            FlashMessage::success(
                "Adresse e-mail vérifiée. Vous pouvez maintenant vous connecter.".to_string(),
            )
            .send();
            redirect("/connexion")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/verification-email")
        }
        Err(err) => {
            log::error!("E-mail verification failed: {err}");
            FlashMessage::error(
                "Erreur lors de la vérification. Veuillez réessayer.".to_string(),
            )
            .send();
            redirect("/verification-email")
        }
    }
}
