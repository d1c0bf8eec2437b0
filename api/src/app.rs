//! Application factory
//!
//! Builds the actix-web `App` with shared state, extractor error handlers,
//! request logging and all `/api/v1` routes.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse, ResponseError,
};

use crate::handlers::error::ApiError;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::authenticate;
use crate::routes::contacts::{
    create_contact, delete_contact, get_contact, list_contacts, update_contact,
};
use crate::routes::users::{activate, register};
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Create and configure the application with all dependencies
pub fn create_app<U, C>(
    app_state: web::Data<AppState<U, C>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    let token_service = app_state.token_service.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("", web::post().to(register::<U, C>))
                        .route("/activate", web::post().to(activate::<U, C>)),
                )
                .route("/token/auth", web::post().to(authenticate::<U, C>))
                .service(
                    web::scope("/contacts")
                        .wrap(JwtAuth::new(token_service))
                        .route("", web::get().to(list_contacts::<U, C>))
                        .route("", web::post().to(create_contact::<U, C>))
                        .route("/{id}", web::get().to(get_contact::<U, C>))
                        .route("/{id}", web::patch().to(update_contact::<U, C>))
                        .route("/{id}", web::delete().to(delete_contact::<U, C>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        ApiError::bad_request(format!("Invalid request body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid path parameter: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid query string: {}", err)).into()
    })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "contacts-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ApiError::not_found("The requested resource was not found").error_response()
}
