//! Shared fixtures for API tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use contacts_api::AppState;
use contacts_core::repositories::{MockContactRepository, MockUserRepository};
use contacts_core::services::{PasswordHasher, TokenService, TokenServiceConfig};

pub type TestState = AppState<MockUserRepository, MockContactRepository>;

pub const TEST_SECRET: &str = "api-test-secret";

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap())
}

/// State over fresh in-memory repositories, with a cheap bcrypt cost
pub fn test_state() -> web::Data<TestState> {
    test_state_with(Arc::new(MockContactRepository::new()))
}

pub fn test_state_with(contacts: Arc<MockContactRepository>) -> web::Data<TestState> {
    web::Data::new(AppState::with_hasher(
        Arc::new(MockUserRepository::new()),
        contacts,
        token_service(),
        PasswordHasher::with_cost(4),
    ))
}

/// Registers and activates an account, returning its id and a session token
pub async fn active_session(state: &TestState, email: &str) -> (u64, String) {
    let registration = state.identity_service.register(email, "p1").await.unwrap();
    state
        .identity_service
        .activate(&registration.activation_token)
        .await
        .unwrap();
    let token = state.identity_service.authenticate(email, "p1").await.unwrap();
    (registration.user.id, token)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
