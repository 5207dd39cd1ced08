//! # Posts Server
//!
//! A json-server style `/posts` collection for running the editor
//! locally. Records live in memory only.

use actix_web::{App, HttpServer, middleware::from_fn, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::ServerConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = ServerConfig::from_env()?;

    tracing::info!("Starting posts server on {}:{}", config.host, config.port);

    let state = AppState::new(config.seed_file.as_deref())?;

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(observability::echo_request_id))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
