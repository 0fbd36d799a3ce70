use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use tera::Tera;

use calmness_vitrine::cms::HttpCms;
use calmness_vitrine::models::config::CmsConfig;
use calmness_vitrine::routes::{alert_level_to_str, redirect, safe_next};
use calmness_vitrine::routes::faq::show_faq;
use calmness_vitrine::routes::main::show_index;
use calmness_vitrine::routes::payment::show_payment;

const TEST_SECRET: &[u8] = b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Content store client pointing at a port nothing listens on, so every
/// fetch fails at the transport layer.
fn unreachable_cms() -> HttpCms {
    HttpCms::new(&CmsConfig {
        url: "http://127.0.0.1:9".to_string(),
        admin_token: None,
    })
}

macro_rules! test_app {
    () => {{
        let secret_key = Key::from(TEST_SECRET);
        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        let tera = Tera::new("templates/**/*.html").expect("templates should parse");
        test::init_service(
            App::new()
                .wrap(message_framework)
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key)
                        .cookie_secure(false)
                        .build(),
                )
                .service(show_index)
                .service(show_faq)
                .service(show_payment)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(unreachable_cms())),
        )
        .await
    }};
}

macro_rules! body_of {
    ($app:expr, $req:expr) => {{
        let response = test::call_service(&$app, $req).await;
        assert!(
            response.status().is_success(),
            "status {}",
            response.status()
        );
        let bytes = test::read_body(response).await;
        String::from_utf8_lossy(&bytes).into_owned()
    }};
}

#[core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[core::prelude::v1::test]
fn test_redirect_is_see_other() {
    let response = redirect("/faq");
    assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(actix_web::http::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/faq")
    );
}

#[core::prelude::v1::test]
fn test_safe_next_rejects_external_targets() {
    assert_eq!(safe_next(Some("/paiement"), "/"), "/paiement");
    assert_eq!(safe_next(Some("https://evil.example"), "/"), "/");
    assert_eq!(safe_next(Some("//evil.example"), "/"), "/");
    assert_eq!(safe_next(None, "/connexion"), "/connexion");
}

/// With the content store down, the home page still renders the default
/// copy rather than an error or an empty field.
#[actix_web::test]
async fn index_renders_defaults_when_store_is_unreachable() {
    let app = test_app!();

    let html = body_of!(app, test::TestRequest::get().uri("/").to_request());

    assert!(html.contains("Des marchés plus lisibles, des décisions plus simples."));
    assert!(html.contains("Analyse • Signal • Exécution"));
}

/// The theme cookie alone decides the rendered theme.
#[actix_web::test]
async fn theme_cookie_switches_the_render() {
    let app = test_app!();

    let light = body_of!(app, test::TestRequest::get().uri("/").to_request());
    assert!(light.contains(r#"data-theme="light""#));

    let dark = body_of!(app, test::TestRequest::get().uri("/").cookie(Cookie::new("theme", "dark")).to_request());
    assert!(dark.contains(r#"data-theme="dark""#));
}

/// The FAQ search matches question and answer text, case-insensitively.
#[actix_web::test]
async fn faq_search_filters_the_list() {
    let app = test_app!();

    let html = body_of!(app, test::TestRequest::get().uri("/faq?q=RISQUE").to_request());

    assert!(html.contains("Comment gérez-vous le risque ?"));
    assert!(html.contains("Quels types de formations proposez-vous ?"));
    assert!(!html.contains("garantie de satisfaction"));
}

/// Only the addressed accordion item renders open.
#[actix_web::test]
async fn faq_accordion_opens_a_single_item() {
    let app = test_app!();

    let html = body_of!(app, test::TestRequest::get().uri("/faq?open=2").to_request());

    assert_eq!(html.matches("faq-item open").count(), 1);
}

/// Without a signed-in session the payment page shows the login gate and no
/// payment method can be selected.
#[actix_web::test]
async fn payment_page_requires_login() {
    let app = test_app!();

    let html = body_of!(app, test::TestRequest::get().uri("/paiement?service=signaux-premium").to_request());

    assert!(html.contains("Connexion Requise"));
    assert!(!html.contains("Confirmer le paiement"));
}
