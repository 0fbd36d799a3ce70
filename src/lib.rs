#![allow(async_fn_in_trait)]

use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::auth::HttpAuth;
use crate::billing::HttpBilling;
use crate::cms::HttpCms;
use crate::models::config::ServerConfig;
use crate::routes::auth::{login, logout, show_login, show_verify_email, verify_email};
use crate::routes::contact::{send_message, show_contact};
use crate::routes::faq::show_faq;
use crate::routes::main::{show_about, show_community, show_index, toggle_theme};
use crate::routes::payment::{show_payment, submit_payment};
use crate::routes::services::show_services;

pub mod auth;
pub mod billing;
pub mod cms;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let cms = HttpCms::new(&server_config.cms);
    let billing = HttpBilling::new(&server_config.billing);
    let auth = HttpAuth::new(&server_config.auth);

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let assets_dir = server_config.assets_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", assets_dir.clone()))
            .service(show_index)
            .service(show_about)
            .service(show_community)
            .service(show_services)
            .service(show_faq)
            .service(show_contact)
            .service(send_message)
            .service(show_payment)
            .service(submit_payment)
            .service(show_login)
            .service(login)
            .service(logout)
            .service(show_verify_email)
            .service(verify_email)
            .service(toggle_theme)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(cms.clone()))
            .app_data(web::Data::new(billing.clone()))
            .app_data(web::Data::new(auth.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
