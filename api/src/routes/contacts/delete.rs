use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};

/// Handler for DELETE /api/v1/contacts/{id}
///
/// Responds 204 with an empty body on success.
pub async fn delete_contact<U, C>(
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
        .delete(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
