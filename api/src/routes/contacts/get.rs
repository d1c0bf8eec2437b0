use actix_web::{web, HttpResponse};

use crate::dto::contacts::ContactResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for GET /api/v1/contacts/{id}
///
/// Contacts of other users answer 404 like missing ones.
pub async fn get_contact<U, C>(
    state: web::Data<AppState<U, C>>,
    auth: AuthContext,
    path: web::Path<u64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    match state
        .contact_service
        .get(auth.user_id, path.into_inner())
        .await
    {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse::from(contact)),
        Err(error) => handle_domain_error(&error),
    }
}
