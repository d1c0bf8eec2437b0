use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::contacts::{ContactRequest, ContactResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for POST /api/v1/contacts
///
/// The new contact is always owned by the caller.
pub async fn create_contact<U, C>(
    state: web::Data<AppState<U, C>>,
    auth: AuthContext,
    request: web::Json<ContactRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .contact_service
        .create(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(contact) => HttpResponse::Created().json(ContactResponse::from(contact)),
        Err(error) => handle_domain_error(&error),
    }
}
