use actix_web::{web, HttpResponse};

use crate::dto::users::{ActivateRequest, MessageResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for POST /api/v1/users/activate
///
/// Exchanges an activation token for an active account.
///
/// ## Errors
/// - 400 Bad Request: Token missing, invalid, expired, or account already active
/// - 404 Not Found: The account no longer exists
/// - 409 Conflict: A concurrent activation won
pub async fn activate<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<ActivateRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    match state
        .identity_service
        .activate(&request.activation_token)
        .await
    {
        Ok(user) => {
            log::info!("User {} activated", user.id);
            HttpResponse::Ok().json(MessageResponse::new("User activated successfully"))
        }
        Err(error) => handle_domain_error(&error),
    }
}
