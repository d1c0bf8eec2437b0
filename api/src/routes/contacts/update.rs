use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::contacts::{ContactRequest, ContactResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for PATCH /api/v1/contacts/{id}
///
/// Replaces name, email and phone; omitted fields become empty strings.
pub async fn update_contact<U, C>(
    state: web::Data<AppState<U, C>>,
    auth: AuthContext,
    path: web::Path<u64>,
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
        .update(auth.user_id, path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse::from(contact)),
        Err(error) => handle_domain_error(&error),
    }
}
