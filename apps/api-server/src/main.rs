//! # MasterBlog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, middleware::from_fn, web};
use anyhow::Context;
use masterblog_core::SortOrder;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting MasterBlog API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config.storage);

    // Surface a broken posts file at startup instead of on the first request.
    match state.posts.list(SortOrder::Oldest).await {
        Ok(existing) if existing.is_clean() => {
            tracing::info!(posts = existing.value.len(), "Post storage ready");
        }
        Ok(_) => {
            tracing::warn!(location = %state.posts.location(), "Post storage is unreadable");
        }
        Err(e) => {
            tracing::error!(location = %state.posts.location(), error = %e, "Post storage is unavailable");
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(observability::request_id))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server terminated with an error")
}
