use actix_web::{web, HttpResponse};

use crate::dto::contacts::{ContactListResponse, ListContactsQuery};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use contacts_core::repositories::{ContactRepository, UserRepository};
use contacts_shared::types::Pagination;

/// Handler for GET /api/v1/contacts?page=&page_size=
///
/// Absent, zero, negative or non-numeric paging values fall back to
/// page 1 and 10 items per page.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "contacts": [...], "total": 12, "page": 1, "pageSize": 10 }
/// ```
pub async fn list_contacts<U, C>(
    state: web::Data<AppState<U, C>>,
    auth: AuthContext,
    query: web::Query<ListContactsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    let pagination = Pagination::from_raw(query.page.as_deref(), query.page_size.as_deref());

    match state.contact_service.list(auth.user_id, pagination).await {
        Ok(page) => HttpResponse::Ok().json(ContactListResponse::from(page)),
        Err(error) => handle_domain_error(&error),
    }
}
