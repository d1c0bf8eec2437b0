//! Conversion of domain and request errors into HTTP responses
//!
//! Every failure leaves the API as an [`ErrorResponse`] body. Internal
//! failures are logged with their cause and answered with a generic message.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use contacts_core::errors::{AuthError, DomainError, TokenError};
use contacts_shared::errors::error_codes;

/// Message used for every rejected or missing token
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or expired token";

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// An error that already knows its HTTP status and body
///
/// Used where actix expects an `actix_web::Error`: extractor error handlers
/// and the `AuthContext` extractor.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            UNAUTHORIZED_MESSAGE,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, message)
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.error, self.body.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        self.body.to_response(self.status)
    }
}

impl From<&DomainError> for ApiError {
    fn from(error: &DomainError) -> Self {
        let (status, code, message) = classify(error);
        Self::new(status, code, message)
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let api_error = ApiError::from(error);

    if api_error.status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }

    api_error.error_response()
}

/// 400 response listing the failing fields of a validated request body
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    log::debug!("Validation failed: {:?}", response.details);
    response.to_response(StatusCode::BAD_REQUEST)
}

fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::ValidationErr(e) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            e.to_string(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Conflict { message } => {
            (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone())
        }
        DomainError::Internal { .. } => internal(),
        DomainError::Auth(auth_error) => {
            let (status, code) = match auth_error {
                AuthError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
                }
                AuthError::InactiveAccount => {
                    (StatusCode::UNAUTHORIZED, error_codes::INACTIVE_ACCOUNT)
                }
                AuthError::AlreadyActive => (StatusCode::BAD_REQUEST, error_codes::ALREADY_ACTIVE),
                AuthError::UserAlreadyExists => {
                    (StatusCode::CONFLICT, error_codes::USER_ALREADY_EXISTS)
                }
                AuthError::InvalidActivationToken => (
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_ACTIVATION_TOKEN,
                ),
            };
            (status, code, auth_error.to_string())
        }
        DomainError::Token(TokenError::ConfigurationMissing | TokenError::SigningFailure) => {
            internal()
        }
        // Token failures share one body so the cause is not revealed
        DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            UNAUTHORIZED_MESSAGE.to_string(),
        ),
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        INTERNAL_MESSAGE.to_string(),
    )
}
