use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthenticateRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for POST /api/v1/token/auth
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Email or password missing
/// - 401 Unauthorized: Wrong credentials or inactive account
pub async fn authenticate<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<AuthenticateRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .identity_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(&error),
    }
}
