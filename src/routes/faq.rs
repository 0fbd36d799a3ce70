use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::faq::FaqQuery;
use crate::routes::{page_context, render_template};
use crate::services::faq;

#[get("/faq")]
pub async fn show_faq(
    req: HttpRequest,
    params: web::Query<FaqQuery>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = faq::load_faq_page(params.into_inner());

    let mut context = page_context(&req, "faq", &session, &flash_messages);
    context.insert("items", &data.items);
    context.insert("search_query", &data.search_query);
    context.insert("total", &data.total);

    render_template(&tera, "faq/index.html", &context)
}
