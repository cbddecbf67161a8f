//! Main token service implementation

use rand::{rngs::OsRng, RngCore};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, REFRESH_TOKEN_BYTES};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::access::{issue_access_token, verify_access_token};
use super::config::TokenServiceConfig;

/// Generates an opaque refresh token value
///
/// 32 bytes from the operating system CSPRNG, hex encoded to 64 lowercase
/// characters.
pub fn make_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Service for issuing access tokens and managing refresh tokens
///
/// Holds no mutable state of its own; every refresh token mutation is a
/// single-row operation delegated to the repository.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Token service configuration
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Issues an access token for a user with the configured lifetime
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        issue_access_token(
            user_id,
            self.config.access_token_ttl_seconds,
            &self.config.jwt_secret,
        )
    }

    /// Verifies an access token against the configured secret
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, DomainError> {
        verify_access_token(token, &self.config.jwt_secret)
    }

    /// Issues and persists a new refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The token value to hand to the client
    /// * `Err(DomainError)` - The record could not be written; the caller
    ///   must treat this as a failed login, never as a partial success
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token = make_refresh_token();
        let record = RefreshToken::with_expiry_days(
            token.clone(),
            user_id,
            self.config.refresh_token_expiry_days,
        );

        self.repository
            .insert_refresh_token(record)
            .await
            .map_err(|e| {
                tracing::error!(%user_id, error = %e, "failed to persist refresh token");
                e
            })?;

        tracing::debug!(%user_id, "refresh token issued");
        Ok(token)
    }

    /// Resolves a refresh token to its owning user
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The token exists, is unrevoked and unexpired
    /// * `Err(TokenError::NoTokenFound)` - Anything else; absent, revoked and
    ///   expired tokens look the same to the caller
    pub async fn resolve_refresh_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let record = self.repository.find_active_refresh_token(token).await?;

        match record {
            Some(record) if record.is_active() => Ok(record.user_id),
            _ => {
                tracing::warn!("refresh token rejected");
                Err(TokenError::NoTokenFound.into())
            }
        }
    }

    /// Revokes a refresh token
    ///
    /// Idempotent: revoking an already revoked or unknown token succeeds.
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        self.repository.mark_refresh_token_revoked(token).await?;
        tracing::debug!("refresh token revoked");
        Ok(())
    }
}
