//! Identity service implementation

use std::sync::Arc;

use contacts_shared::utils::validation::{is_valid_email, mask_email, not_empty};
use tracing::{debug, info, warn};

use crate::domain::entities::token::TokenPurpose;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Outcome of a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    /// The stored, still inactive user
    pub user: User,
    /// Token to be exchanged at the activation endpoint
    pub activation_token: String,
}

/// Service managing the identity lifecycle
///
/// `Registered (active = false) -> Activated (active = true)`; only activated
/// identities can obtain a session token.
pub struct IdentityService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for activation and session tokens
    token_service: Arc<TokenService>,
    /// Credential hasher
    hasher: PasswordHasher,
}

impl<U: UserRepository> IdentityService<U> {
    /// Create a new identity service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Shared token service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
            hasher: PasswordHasher::new(),
        }
    }

    /// Replace the credential hasher (tests use a low work factor)
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Register a new, inactive identity and issue its activation token
    ///
    /// # Arguments
    ///
    /// * `email` - Login email, must be unique regardless of case
    /// * `password` - Plaintext password, must not be empty
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationResult)` - The stored user and its activation token
    /// * `Err(ValidationErr)` - Email or password rejected
    /// * `Err(AuthError::UserAlreadyExists)` - The email is taken
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<RegistrationResult> {
        let email = normalize_email(email);
        let email = email.as_str();
        validate_email(email)?;
        if !not_empty(password) {
            return Err(required("password"));
        }

        if self.user_repository.find_by_email(email).await?.is_some() {
            warn!(email = %mask_email(email), "Registration rejected: email already in use");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hasher.hash_blocking(password).await?;
        let user = self
            .user_repository
            .create(NewUser::new(email, password_hash))
            .await?;

        let activation_token = self.token_service.issue_activation_token(user.id)?;

        info!(user_id = user.id, email = %mask_email(&user.email), "User registered");

        Ok(RegistrationResult {
            user,
            activation_token,
        })
    }

    /// Activate the identity an activation token was issued for
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The now active user
    /// * `Err(AuthError::InvalidActivationToken)` - The token is unusable for activation
    /// * `Err(NotFound)` - The identity no longer exists
    /// * `Err(AuthError::AlreadyActive)` - The identity was already active
    /// * `Err(Conflict)` - A concurrent activation won the race
    pub async fn activate(&self, activation_token: &str) -> DomainResult<User> {
        if !not_empty(activation_token) {
            return Err(required("activation_token"));
        }

        let user_id = match self
            .token_service
            .resolve_identity_for(activation_token, TokenPurpose::Activation)
        {
            Ok(user_id) => user_id,
            Err(DomainError::Token(e)) => {
                debug!(error = %e, "Activation token rejected");
                return Err(AuthError::InvalidActivationToken.into());
            }
            Err(e) => return Err(e),
        };

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if user.is_active() {
            return Err(AuthError::AlreadyActive.into());
        }

        if !self.user_repository.activate(user_id).await? {
            warn!(user_id, "Activation lost a concurrent update");
            return Err(DomainError::Conflict {
                message: "User is already activated".to_string(),
            });
        }

        user.activate();
        info!(user_id, "User activated");
        Ok(user)
    }

    /// Exchange credentials for a session token
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A session token
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// * `Err(AuthError::InactiveAccount)` - The identity has not been activated
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<String> {
        let email = normalize_email(email);
        let email = email.as_str();
        if !not_empty(email) {
            return Err(required("email"));
        }
        if !not_empty(password) {
            return Err(required("password"));
        }

        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!(email = %mask_email(email), "Authentication failed: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.is_active() {
            debug!(user_id = user.id, "Authentication refused: account inactive");
            return Err(AuthError::InactiveAccount.into());
        }

        if !self
            .hasher
            .verify_blocking(password, &user.password_hash)
            .await?
        {
            debug!(user_id = user.id, "Authentication failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_session_token(user.id)?;
        info!(user_id = user.id, "User authenticated");
        Ok(token)
    }
}

/// Emails are stored and looked up lowercased; the users table collation
/// ignores case as well.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn required(field: &str) -> DomainError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
    .into()
}

fn validate_email(email: &str) -> DomainResult<()> {
    if !not_empty(email) {
        return Err(required("email"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    Ok(())
}
