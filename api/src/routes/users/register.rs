use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::users::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};
use contacts_shared::utils::validation::mask_email;

/// Handler for POST /api/v1/users
///
/// Registers an inactive account and returns its activation token.
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "p1" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "activation_token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email or empty password
/// - 409 Conflict: Email already registered
pub async fn register<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!("Processing registration for {}", mask_email(&request.email));

    match state
        .identity_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Created().json(RegisterResponse {
            activation_token: result.activation_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
