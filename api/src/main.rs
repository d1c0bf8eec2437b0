use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use contacts_api::{create_app, AppState};
use contacts_core::services::token::{TokenService, TokenServiceConfig};
use contacts_infra::{DatabasePool, MySqlContactRepository, MySqlUserRepository};
use contacts_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Contact Manager API Server");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let database = DatabasePool::new(&config.database)
        .await
        .map_err(startup_error)?;
    database.run_migrations().await.map_err(startup_error)?;

    let token_service = TokenService::new(TokenServiceConfig::from(&config.auth))
        .map_err(startup_error)?;

    let user_repository = Arc::new(MySqlUserRepository::new(database.get_pool().clone()));
    let contact_repository = Arc::new(MySqlContactRepository::new(database.get_pool().clone()));
    let app_state = web::Data::new(AppState::new(
        user_repository,
        contact_repository,
        Arc::new(token_service),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let result = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    database.close().await;
    result
}

fn startup_error<E: std::fmt::Display>(e: E) -> std::io::Error {
    error!("Startup failed: {}", e);
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
