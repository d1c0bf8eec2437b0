//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations convert storage failures into `DomainError::Internal`.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use contacts_core::repositories::UserRepository;
/// use contacts_core::domain::entities::user::{NewUser, User};
/// use contacts_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: NewUser) -> Result<User, DomainError> {
///         Ok(user.into_user(1))
///     }
///
///     async fn activate(&self, id: u64) -> Result<bool, DomainError> {
///         Ok(true)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its identifier
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Find a user by email address (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new, inactive user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user with its assigned id
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - The email is taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Flip `active` from false to true in a single conditional write
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - This call activated the user
    /// * `Ok(false)` - No inactive user with that id existed at write time
    async fn activate(&self, id: u64) -> Result<bool, DomainError>;
}
