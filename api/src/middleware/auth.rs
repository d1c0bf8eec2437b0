//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the session token from the Authorization header,
//! resolves the identity it is bound to, and injects an [`AuthContext`] into
//! the request. Any failure ends the request with a uniform 401 response.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use contacts_core::{
    domain::entities::token::TokenPurpose,
    errors::DomainResult,
    services::token::TokenService,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;

/// Identity of the caller, attached to the request by [`JwtAuth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID taken from the session token
    pub user_id: u64,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the middleware around the shared token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");

            let user_id = match authenticate(&token_service, header) {
                Ok(user_id) => user_id,
                Err(e) => {
                    log::debug!("Rejected request to {}: {}", req.path(), e);
                    let response = ApiError::unauthorized().error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(AuthContext { user_id });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Resolves the session identity carried by an Authorization header value
pub fn authenticate(token_service: &TokenService, header: &str) -> DomainResult<u64> {
    let token = TokenService::extract_bearer(header)?;
    token_service.resolve_identity_for(token, TokenPurpose::Session)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| Error::from(ApiError::unauthorized()));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::errors::{DomainError, TokenError};
    use contacts_core::services::token::TokenServiceConfig;

    fn token_service() -> TokenService {
        TokenService::new(TokenServiceConfig::new("middleware-secret")).unwrap()
    }

    #[test]
    fn test_authenticate_header() {
        let service = token_service();
        let token = service.issue_session_token(11).unwrap();

        assert_eq!(
            authenticate(&service, &format!("Bearer {}", token)).unwrap(),
            11
        );
        assert!(matches!(
            authenticate(&service, ""),
            Err(DomainError::Token(TokenError::MissingHeader))
        ));
        assert!(matches!(
            authenticate(&service, &token),
            Err(DomainError::Token(TokenError::MalformedHeader))
        ));
    }

    #[test]
    fn test_activation_token_is_not_a_session() {
        let service = token_service();
        let token = service.issue_activation_token(11).unwrap();

        assert!(matches!(
            authenticate(&service, &format!("Bearer {}", token)),
            Err(DomainError::Token(TokenError::WrongPurpose))
        ));
    }
}
