//! Unit tests for token service

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::token::TokenPurpose;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "test-secret-key";

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET)).unwrap()
}

fn sign_raw(claims: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn future_exp() -> i64 {
    (Utc::now() + Duration::hours(1)).timestamp()
}

fn assert_token_error(result: Result<impl std::fmt::Debug, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(actual)) => assert_eq!(actual, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[test]
fn test_empty_secret_is_rejected() {
    assert_token_error(
        TokenService::new(TokenServiceConfig::new("")).map(|_| ()),
        TokenError::ConfigurationMissing,
    );
}

#[test]
fn test_issue_then_resolve_identity() {
    let service = create_test_service();

    let token = service.issue_session_token(42).unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert!(service.verify(&token).unwrap());
    assert_eq!(service.resolve_identity(&token).unwrap(), 42);
}

#[test]
fn test_tokens_for_distinct_ids_resolve_to_their_ids() {
    let service = create_test_service();

    let first = service.issue_activation_token(1).unwrap();
    let second = service.issue_activation_token(2).unwrap();

    assert_eq!(service.resolve_identity(&first).unwrap(), 1);
    assert_eq!(service.resolve_identity(&second).unwrap(), 2);
}

#[test]
fn test_expired_token_fails() {
    let service = TokenService::new(
        TokenServiceConfig::new(SECRET).with_ttl(Duration::seconds(-60)),
    )
    .unwrap();

    let token = service.issue_session_token(7).unwrap();

    assert_token_error(service.verify(&token), TokenError::Expired);
    assert_token_error(service.resolve_identity(&token), TokenError::Expired);
}

#[test]
fn test_token_signed_with_other_secret_fails() {
    let service = create_test_service();
    let token = sign_raw(
        json!({ "user_id": 1, "exp": future_exp(), "purpose": "session" }),
        "another-secret",
    );

    assert_token_error(service.verify(&token), TokenError::InvalidToken);
}

#[test]
fn test_garbage_and_empty_tokens() {
    let service = create_test_service();

    assert_token_error(service.verify(""), TokenError::EmptyToken);
    assert_token_error(service.verify("   "), TokenError::EmptyToken);
    assert_token_error(service.verify("not.a.jwt"), TokenError::InvalidToken);
    assert_token_error(service.verify("abc"), TokenError::InvalidToken);
}

#[test]
fn test_tampered_payload_fails() {
    let service = create_test_service();
    let token = service.issue_session_token(1).unwrap();
    let other = service.issue_session_token(2).unwrap();

    // Payload of one token with the signature of another
    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert_token_error(service.verify(&forged), TokenError::InvalidToken);
}

#[test]
fn test_missing_user_id_claim() {
    let service = create_test_service();
    let token = sign_raw(json!({ "exp": future_exp(), "purpose": "session" }), SECRET);

    assert!(service.verify(&token).unwrap());
    assert_token_error(
        service.resolve_identity(&token),
        TokenError::ClaimMissing {
            claim: "user_id".to_string(),
        },
    );
}

#[test]
fn test_non_numeric_user_id_claim() {
    let service = create_test_service();
    let token = sign_raw(
        json!({ "user_id": "42", "exp": future_exp(), "purpose": "session" }),
        SECRET,
    );

    assert_token_error(
        service.resolve_identity(&token),
        TokenError::ClaimMissing {
            claim: "user_id".to_string(),
        },
    );
}

#[test]
fn test_missing_exp_is_invalid() {
    let service = create_test_service();
    let token = sign_raw(json!({ "user_id": 1, "purpose": "session" }), SECRET);

    assert_token_error(service.verify(&token), TokenError::InvalidToken);
}

#[test]
fn test_purpose_is_enforced() {
    let service = create_test_service();
    let session = service.issue_session_token(5).unwrap();
    let activation = service.issue_activation_token(5).unwrap();

    assert_eq!(
        service.resolve_identity_for(&session, TokenPurpose::Session).unwrap(),
        5
    );
    assert_eq!(
        service
            .resolve_identity_for(&activation, TokenPurpose::Activation)
            .unwrap(),
        5
    );
    assert_token_error(
        service.resolve_identity_for(&session, TokenPurpose::Activation),
        TokenError::WrongPurpose,
    );
    assert_token_error(
        service.resolve_identity_for(&activation, TokenPurpose::Session),
        TokenError::WrongPurpose,
    );
}

#[test]
fn test_token_without_purpose_is_rejected_for_any_purpose() {
    let service = create_test_service();
    let token = sign_raw(json!({ "user_id": 3, "exp": future_exp() }), SECRET);

    assert_eq!(service.resolve_identity(&token).unwrap(), 3);
    assert_token_error(
        service.resolve_identity_for(&token, TokenPurpose::Session),
        TokenError::WrongPurpose,
    );
}

#[test]
fn test_extract_bearer() {
    assert_eq!(
        TokenService::extract_bearer("Bearer abc.def.ghi").unwrap(),
        "abc.def.ghi"
    );
    assert_eq!(
        TokenService::extract_bearer("bearer abc.def.ghi").unwrap(),
        "abc.def.ghi"
    );
    assert_eq!(
        TokenService::extract_bearer("BEARER   abc.def.ghi").unwrap(),
        "abc.def.ghi"
    );
}

#[test]
fn test_extract_bearer_rejects_bad_headers() {
    assert_token_error(TokenService::extract_bearer(""), TokenError::MissingHeader);
    assert_token_error(TokenService::extract_bearer("  "), TokenError::MissingHeader);
    assert_token_error(
        TokenService::extract_bearer("abc.def.ghi"),
        TokenError::MalformedHeader,
    );
    assert_token_error(
        TokenService::extract_bearer("Basic abc.def.ghi"),
        TokenError::MalformedHeader,
    );
    assert_token_error(
        TokenService::extract_bearer("Bearer abc def"),
        TokenError::MalformedHeader,
    );
    assert_token_error(TokenService::extract_bearer("Bearer"), TokenError::MalformedHeader);
}

#[test]
fn test_config_from_jwt_config() {
    let jwt = contacts_shared::config::JwtConfig {
        token_ttl_hours: 2,
        ..contacts_shared::config::JwtConfig::new("s3cret")
    };
    let config = TokenServiceConfig::from(&jwt);

    assert_eq!(config.secret, "s3cret");
    assert_eq!(config.token_ttl, Duration::hours(2));
    assert!(!format!("{:?}", config).contains("s3cret"));
}
