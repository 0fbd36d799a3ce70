use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cms::HttpCms;
use crate::routes::{page_context, render_template};
use crate::services::pages;

#[get("/services")]
pub async fn show_services(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    cms: web::Data<HttpCms>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages::load_services_page(cms.get_ref()).await;

    let mut context = page_context(&req, "services", &session, &flash_messages);
    context.insert("summaries", &data.summaries);
    context.insert("catalog", &data.catalog);

    render_template(&tera, "services/index.html", &context)
}
