use std::env;

use config::Config;
use dotenvy::dotenv;

use calmness_vitrine::cms::HttpCms;
use calmness_vitrine::models::config::ServerConfig;
use calmness_vitrine::services::bootstrap::{CONTENT_TYPES, configure_public_permissions};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    // Open the public read permissions before serving; a partial or failed
    // run is logged but never blocks the site, which falls back to its
    // hard-coded content until the store is reachable again.
    let cms = HttpCms::new(&server_config.cms);
    match configure_public_permissions(&cms, &CONTENT_TYPES).await {
        Ok(report) if report.is_complete() => {
            log::info!("Public permissions configured for all content types");
        }
        Ok(report) => {
            log::warn!(
                "Public permissions partially configured; missing: {}",
                report.failed.join(", ")
            );
        }
        Err(err) => {
            log::error!("Permission bootstrap failed: {err}");
        }
    }

    calmness_vitrine::run(server_config).await
}
