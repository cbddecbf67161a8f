//! User repository trait defining the interface for user data persistence.
//!
//! The auth core never owns the user lifecycle; it only needs the lookups and
//! updates below to run login, credential changes and the upgrade webhook.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::BadRequest)` - The email is already registered
    /// * `Err(DomainError)` - Store error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their login email
    ///
    /// # Example
    /// ```no_run
    /// # use chirpy_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("walt@breakingbad.com").await? {
    ///     Some(user) => println!("User found: {:?}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Replace a user's email and password hash
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with that id
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Flag a user as upgraded
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with that id
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Remove every user, returning how many were deleted
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
