//! # Musing API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let telemetry = TelemetryConfig::from_env().context("loading logging configuration")?;
    telemetry::init_telemetry(&telemetry);

    let config = AppConfig::from_env().context("loading configuration")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        site_url = %config.site_url,
        "Starting Musing API Server"
    );

    let state = AppState::from_config(&config)
        .await
        .context("building application state")?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, &state))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("binding {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
