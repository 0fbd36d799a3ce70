use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cms::HttpCms;
use crate::domain::theme::THEME_COOKIE;
use crate::forms::auth::ThemeForm;
use crate::routes::{page_context, render_template, request_theme, safe_next};
use crate::services::pages;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    cms: web::Data<HttpCms>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages::load_home_page(cms.get_ref()).await;

    let mut context = page_context(&req, "index", &session, &flash_messages);
    context.insert("page", &data.content);

    render_template(&tera, "main/index.html", &context)
}

#[get("/a-propos")]
pub async fn show_about(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    cms: web::Data<HttpCms>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages::load_about_page(cms.get_ref()).await;

    let mut context = page_context(&req, "a-propos", &session, &flash_messages);
    context.insert("page", &data.content);

    render_template(&tera, "main/about.html", &context)
}

#[get("/communaute")]
pub async fn show_community(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = page_context(&req, "communaute", &session, &flash_messages);

    render_template(&tera, "main/community.html", &context)
}

/// Flips the theme marker and returns to the originating page. The cookie
/// alone decides the rendered theme on the next request.
#[post("/theme")]
pub async fn toggle_theme(req: HttpRequest, form: web::Form<ThemeForm>) -> impl Responder {
    let next_theme = request_theme(&req).toggled();

    let cookie = Cookie::build(THEME_COOKIE, next_theme.as_str())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .finish();

    HttpResponse::SeeOther()
        .insert_header((
            actix_web::http::header::LOCATION,
            safe_next(form.next.as_deref(), "/"),
        ))
        .cookie(cookie)
        .finish()
}
