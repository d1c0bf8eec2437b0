//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::domain::entities::token::{Claims, TokenPurpose};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Claim set as read back from a verified token.
///
/// Identity and purpose are decoded loosely so that a signed token with a
/// missing or mistyped claim is reported as such rather than as a generic
/// decoding failure.
#[derive(Debug, Deserialize)]
struct VerifiedClaims {
    #[serde(default)]
    user_id: Option<serde_json::Value>,
    #[serde(default)]
    purpose: Option<String>,
}

/// Service for issuing and verifying signed, time-limited tokens
///
/// Immutable after construction; share it behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and validity window
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Ready to issue and verify tokens
    /// * `Err(TokenError::ConfigurationMissing)` - The secret is empty
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        if config.secret.is_empty() {
            return Err(TokenError::ConfigurationMissing.into());
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token bound to an identity
    ///
    /// # Arguments
    ///
    /// * `user_id` - The identity the token speaks for
    /// * `purpose` - Where the token will be accepted
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::SigningFailure)` - Encoding failed
    pub fn issue(&self, user_id: u64, purpose: TokenPurpose) -> DomainResult<String> {
        let claims = Claims::new(user_id, purpose, self.config.token_ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, %purpose, "Failed to sign token");
            DomainError::Token(TokenError::SigningFailure)
        })
    }

    /// Issues a session token returned by authentication
    pub fn issue_session_token(&self, user_id: u64) -> DomainResult<String> {
        self.issue(user_id, TokenPurpose::Session)
    }

    /// Issues an activation token returned by registration
    pub fn issue_activation_token(&self, user_id: u64) -> DomainResult<String> {
        self.issue(user_id, TokenPurpose::Activation)
    }

    /// Checks signature, structure and expiry of a token
    ///
    /// Never returns `Ok(false)`: every rejection is reported as a typed error.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The token is valid
    /// * `Err(TokenError::EmptyToken)` - No token was supplied
    /// * `Err(TokenError::Expired)` - The token is past its `exp`
    /// * `Err(TokenError::InvalidToken)` - Bad signature or structure
    pub fn verify(&self, token: &str) -> DomainResult<bool> {
        self.decode_verified(token).map(|_| true)
    }

    /// Verifies a token and returns the identity it is bound to
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The `user_id` claim
    /// * `Err(TokenError::ClaimMissing)` - The claim is absent or not an unsigned integer
    /// * Any error from `verify`
    pub fn resolve_identity(&self, token: &str) -> DomainResult<u64> {
        let claims = self.decode_verified(token)?;
        Self::user_id_of(&claims)
    }

    /// Verifies a token, requires the given purpose and returns the identity
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The `user_id` claim
    /// * `Err(TokenError::WrongPurpose)` - The token was issued for something else
    /// * Any error from `resolve_identity`
    pub fn resolve_identity_for(&self, token: &str, purpose: TokenPurpose) -> DomainResult<u64> {
        let claims = self.decode_verified(token)?;
        let user_id = Self::user_id_of(&claims)?;

        if claims.purpose.as_deref() != Some(purpose.as_str()) {
            tracing::debug!(expected = %purpose, "Token presented for the wrong purpose");
            return Err(TokenError::WrongPurpose.into());
        }

        Ok(user_id)
    }

    /// Extracts the token from an `Authorization: Bearer <token>` header value
    ///
    /// The scheme is matched case-insensitively and the value must consist of
    /// exactly two whitespace-separated parts.
    pub fn extract_bearer(header_value: &str) -> DomainResult<&str> {
        if header_value.trim().is_empty() {
            return Err(TokenError::MissingHeader.into());
        }

        let mut parts = header_value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Ok(token)
            }
            _ => Err(TokenError::MalformedHeader.into()),
        }
    }

    fn decode_verified(&self, token: &str) -> DomainResult<VerifiedClaims> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyToken.into());
        }

        let token_data = decode::<VerifiedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::Expired)
                } else {
                    tracing::debug!(error = %e, "Token verification failed");
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }

    fn user_id_of(claims: &VerifiedClaims) -> DomainResult<u64> {
        claims
            .user_id
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                DomainError::Token(TokenError::ClaimMissing {
                    claim: "user_id".to_string(),
                })
            })
    }
}
