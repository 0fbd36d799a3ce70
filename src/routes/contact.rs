use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::cms::HttpCms;
use crate::forms::contact::ContactForm;
use crate::routes::{page_context, redirect, render_template};
use crate::services::pages;

#[get("/contact")]
pub async fn show_contact(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    cms: web::Data<HttpCms>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages::load_contact_page(cms.get_ref()).await;

    let mut context = page_context(&req, "contact", &session, &flash_messages);
    context.insert("contact", &data.contact);

    render_template(&tera, "contact/index.html", &context)
}

#[post("/contact")]
pub async fn send_message(web::Form(form): web::Form<ContactForm>) -> impl Responder {
    if let Err(err) = form.validate() {
        log::warn!("Rejected contact message: {err}");
        FlashMessage::error(
            "Votre message n'a pas pu être envoyé. Vérifiez les champs du formulaire."
                .to_string(),
        )
        .send();
        return redirect("/contact");
    }

    // Messages are relayed by the support inbox; the site only acknowledges.
    log::info!("Contact message from {} ({})", form.email, form.sujet);
    FlashMessage::success(
        "Merci pour votre message. Notre équipe vous répondra rapidement.".to_string(),
    )
    .send();
    redirect("/contact")
}
