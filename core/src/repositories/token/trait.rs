//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// Records are addressed by their opaque token value. Implementations must
/// give at least read-committed isolation so that a completed revoke is
/// visible to every later lookup.
///
/// # Security Considerations
/// - Records are soft-revoked, never deleted by the core
/// - An active record is unrevoked AND strictly before its expiry
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - The write did not succeed
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use chirpy_core::repositories::TokenRepository;
    /// # use chirpy_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = RefreshToken::new("9f86d081884c7d65".to_string(), Uuid::new_v4());
    ///
    /// let saved = repo.insert_refresh_token(token).await?;
    /// println!("Token saved for user: {}", saved.user_id);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token that may still be used
    ///
    /// # Arguments
    /// * `token` - The exact token value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record exists, is unrevoked and unexpired
    /// * `Ok(None)` - Absent, revoked or expired; callers cannot tell which
    /// * `Err(DomainError)` - Store error occurred
    async fn find_active_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Mark a refresh token as revoked
    ///
    /// Sets the revocation time and bumps the update time. Revoking an
    /// unknown or already revoked token is not an error.
    ///
    /// # Arguments
    /// * `token` - The exact token value
    ///
    /// # Returns
    /// * `Ok(())` - Statement applied (possibly to zero rows)
    /// * `Err(DomainError)` - Store error occurred
    async fn mark_refresh_token_revoked(&self, token: &str) -> Result<(), DomainError>;
}
