mod config;
mod core;
mod models;
mod routes;
mod services;
mod templates;

use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::PairingSelector;
use crate::routes::pages::AppState;
use crate::services::{CocktailDbClient, MealDbClient};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Sipside...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize upstream API clients
    let timeout_secs = settings.upstream.timeout_secs.unwrap_or(10);

    let cocktails = Arc::new(CocktailDbClient::new(
        settings.upstream.cocktail_base_url,
        timeout_secs,
    ));
    let meals = Arc::new(MealDbClient::new(
        settings.upstream.meal_base_url,
        timeout_secs,
    ));

    info!("Upstream API clients initialized (timeout: {}s)", timeout_secs);

    // Build application state; the pairing tables are static and the
    // selector just carries the random source.
    let app_state = AppState {
        cocktails,
        meals,
        selector: PairingSelector::with_thread_rng(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::route().to(routes::pages::not_found))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
