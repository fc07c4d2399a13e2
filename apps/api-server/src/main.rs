//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::BlogRootSpan;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_logging(config.log_format);

    tracing::info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        log_format = ?config.log_format,
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::init(&config.database)
        .await
        .inspect_err(|e| tracing::error!("Database connection failed: {:#}", e))
        .context("database connection failed")?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<BlogRootSpan>::new())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
