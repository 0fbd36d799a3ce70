//! HTTP handlers and the small helpers they share.

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::payment::PendingIntent;
use crate::domain::theme::{THEME_COOKIE, Theme};
use crate::models::auth::AuthenticatedUser;

pub mod auth;
pub mod contact;
pub mod faq;
pub mod main;
pub mod payment;
pub mod services;

/// Session key holding the signed-in visitor.
pub const USER_SESSION_KEY: &str = "user";
/// Session key holding the pending payment intent.
pub const PAYMENT_INTENT_SESSION_KEY: &str = "payment_intent";

/// One rendered flash message.
#[derive(Serialize)]
pub struct Alert {
    pub message: String,
    pub level: &'static str,
}

/// Maps flash levels to the alert classes used by the stylesheet.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Renders a template, or a bare 500 when rendering itself fails.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Issues a `303 See Other` to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Reads the theme marker from the request cookie.
pub fn request_theme(req: &HttpRequest) -> Theme {
    let cookie = req.cookie(THEME_COOKIE);
    Theme::from_marker(cookie.as_ref().map(|c| c.value()))
}

/// Reads the signed-in visitor from the session, treating a corrupt record
/// as signed out.
pub fn session_user(session: &Session) -> Option<AuthenticatedUser> {
    session
        .get::<AuthenticatedUser>(USER_SESSION_KEY)
        .unwrap_or_else(|err| {
            log::warn!("Failed to read the session user: {err}");
            None
        })
}

/// Reads the pending payment intent from the session.
pub fn pending_intent(session: &Session) -> Option<PendingIntent> {
    session
        .get::<PendingIntent>(PAYMENT_INTENT_SESSION_KEY)
        .unwrap_or_else(|err| {
            log::warn!("Failed to read the pending payment intent: {err}");
            None
        })
}

/// Builds the context every page template expects: theme, navigation
/// highlighting, the signed-in visitor, and pending alerts.
pub fn page_context(
    req: &HttpRequest,
    current_page: &str,
    session: &Session,
    flash_messages: &IncomingFlashMessages,
) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|f| Alert {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .collect();

    let current_path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let mut context = Context::new();
    context.insert("theme", request_theme(req).as_str());
    context.insert("current_page", current_page);
    context.insert("current_path", current_path);
    context.insert("current_user", &session_user(session));
    context.insert("alerts", &alerts);
    context
}

/// Restricts a user-supplied return target to a site-local path.
pub fn safe_next(next: Option<&str>, fallback: &'static str) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => fallback.to_string(),
    }
}
