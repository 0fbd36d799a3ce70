use actix_session::Session;
use actix_web::http::header::USER_AGENT;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::billing::HttpBilling;
use crate::domain::catalog;
use crate::domain::payment::{PaymentMethod, PaymentOutcome};
use crate::dto::payment::{MethodView, PaymentPageData};
use crate::forms::payment::{ConfirmPaymentForm, PaymentPageQuery};
use crate::routes::{
    PAYMENT_INTENT_SESSION_KEY, page_context, pending_intent, redirect, render_template,
    session_user,
};
use crate::services::payment;

#[get("/paiement")]
pub async fn show_payment(
    req: HttpRequest,
    params: web::Query<PaymentPageQuery>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let entry = catalog::resolve(params.service.as_deref());
    let logged_in = session_user(&session).is_some();

    // Selecting a method starts (or resumes) the pending intent; the
    // idempotency key is minted here, once, not at submit time.
    let mut selected = None;
    if logged_in {
        if let Some(method_id) = params.methode.as_deref() {
            match payment::begin_intent(pending_intent(&session), Some(entry.code), method_id) {
                Ok(intent) => {
                    selected = Some(intent.method);
                    if let Err(err) = session.insert(PAYMENT_INTENT_SESSION_KEY, &intent) {
                        log::error!("Failed to store the pending payment intent: {err}");
                        selected = None;
                    }
                }
                Err(err) => log::warn!("Ignoring invalid payment selection: {err}"),
            }
        }
    }

    let data = payment_page_data(entry, selected);

    let mut context = page_context(&req, "paiement", &session, &flash_messages);
    context.insert("service", &data.service);
    context.insert("methods", &data.methods);
    context.insert("selected", &data.selected);

    render_template(&tera, "payment/index.html", &context)
}

#[post("/paiement/payer")]
pub async fn submit_payment(
    req: HttpRequest,
    session: Session,
    web::Form(form): web::Form<ConfirmPaymentForm>,
    billing: web::Data<HttpBilling>,
) -> impl Responder {
    if session_user(&session).is_none() {
        FlashMessage::error(
            "Vous devez vous connecter avant de procéder au paiement.".to_string(),
        )
        .send();
        return redirect("/connexion?next=/paiement");
    }

    // The pending intent doubles as the double-submit guard: it is cleared on
    // a terminal outcome, so a repeated submit finds nothing and issues no
    // second backend call.
    let Some(intent) = pending_intent(&session) else {
        FlashMessage::warning(
            "Aucun paiement en cours. Sélectionnez un service et un moyen de paiement."
                .to_string(),
        )
        .send();
        return redirect("/paiement");
    };

    let stale = form.service != intent.service_code.as_str()
        || PaymentMethod::from_id(&form.methode) != Some(intent.method);
    if stale {
        FlashMessage::warning(
            "Votre sélection a changé. Veuillez confirmer à nouveau.".to_string(),
        )
        .send();
        return redirect("/paiement");
    }

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let metadata = serde_json::json!({ "ua": user_agent });

    match payment::submit_payment(billing.get_ref(), &intent, metadata).await {
        Ok(outcome) => {
            session.remove(PAYMENT_INTENT_SESSION_KEY);
            match outcome {
                PaymentOutcome::Completed { subscribed: true } => FlashMessage::success(
                    "Paiement initialisé. Votre abonnement est en cours d'activation."
                        .to_string(),
                )
                .send(),
                PaymentOutcome::Completed { subscribed: false } => {
                    FlashMessage::success("Paiement initialisé.".to_string()).send()
                }
                PaymentOutcome::PendingFollowUp { .. } => FlashMessage::warning(
                    "Paiement initialisé, mais l'activation de l'abonnement a échoué. Notre \
                     équipe va régulariser votre dossier."
                        .to_string(),
                )
                .send(),
            }
            redirect("/paiement")
        }
        Err(_) => {
            // The intent stays in the session so a retry reuses its key.
            FlashMessage::error(
                "Impossible d'initialiser le paiement. Merci de réessayer.".to_string(),
            )
            .send();
            let back = format!(
                "/paiement?service={}&methode={}",
                intent.service_code,
                intent.method.id()
            );
            redirect(&back)
        }
    }
}

fn payment_page_data(
    entry: &'static catalog::CatalogEntry,
    selected: Option<PaymentMethod>,
) -> PaymentPageData {
    let methods = PaymentMethod::ALL
        .into_iter()
        .map(|method| MethodView {
            id: method.id(),
            label: method.label(),
            description: method.description(),
            selected: selected == Some(method),
            href: format!("/paiement?service={}&methode={}", entry.code, method.id()),
        })
        .collect();

    PaymentPageData {
        service: entry,
        methods,
        selected: selected.map(PaymentMethod::id),
    }
}
