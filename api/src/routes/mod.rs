//! Route handlers grouped by resource

pub mod auth;
pub mod contacts;
pub mod users;

use std::sync::Arc;

use contacts_core::repositories::{ContactRepository, UserRepository};
use contacts_core::services::{ContactService, IdentityService, PasswordHasher, TokenService};

/// Application state that holds shared services
pub struct AppState<U, C>
where
    U: UserRepository,
    C: ContactRepository,
{
    pub identity_service: Arc<IdentityService<U>>,
    pub contact_service: Arc<ContactService<C>>,
    pub token_service: Arc<TokenService>,
}

impl<U, C> AppState<U, C>
where
    U: UserRepository,
    C: ContactRepository,
{
    /// Wire the services around the given repositories
    pub fn new(user_repository: Arc<U>, contact_repository: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self::with_hasher(
            user_repository,
            contact_repository,
            token_service,
            PasswordHasher::new(),
        )
    }

    /// Same as `new` with an explicit credential hasher
    pub fn with_hasher(
        user_repository: Arc<U>,
        contact_repository: Arc<C>,
        token_service: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        let identity_service =
            IdentityService::new(user_repository, token_service.clone()).with_hasher(hasher);

        Self {
            identity_service: Arc::new(identity_service),
            contact_service: Arc::new(ContactService::new(contact_repository)),
            token_service,
        }
    }
}
