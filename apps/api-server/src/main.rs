//! # Feedline API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Feedline API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref(), config.auto_migrate).await;
    let max_body_bytes = config.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes(max_body_bytes))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
