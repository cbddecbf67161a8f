//! Main authentication service implementation

use std::sync::Arc;

use chirpy_shared::config::Platform;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{LoginResult, WebhookEvent, WebhookOutcome, USER_UPGRADED_EVENT};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::credentials::{get_api_key, get_bearer_token, validate_api_key};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Resolves the caller behind an `Authorization` header
///
/// Handlers outside the auth service depend on this instead of the generic
/// [`AuthService`], so the signing secret has a single owner.
pub trait Authenticator: Send + Sync {
    /// Verify `Bearer <access token>` and return the user it names
    fn authenticate(&self, authorization: Option<&str>) -> DomainResult<Uuid>;
}

const MISSING_FIELDS: &str = "missing required fields";
const BAD_CREDENTIALS: &str = "incorrect email or password";
const INVALID_API_KEY: &str = "invalid api key";
const INVALID_WEBHOOK_PAYLOAD: &str = "invalid webhook payload";
const USER_NOT_FOUND: &str = "user not found";
const RESET_FORBIDDEN: &str = "reset is only allowed in dev environment";

/// Authentication service for the account and session flows
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for access and refresh tokens
    token_service: Arc<TokenService<T>>,
    /// Password hasher
    hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for token issuance and revocation
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Replace the password hasher, e.g. with cheaper parameters
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn token_service(&self) -> &TokenService<T> {
        &self.token_service
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// * `BadRequest("missing required fields")` - Empty email or password
    /// * `BadRequest("email already registered")` - Email taken
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::bad_request(MISSING_FIELDS));
        }

        let hashed_password = self.hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(email.to_string(), hashed_password))
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Log in with email and password
    ///
    /// An unknown email and a wrong password fail identically. The refresh
    /// token is persisted before the result is returned; if that write fails
    /// the whole login fails.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if self.hasher.verify(password, &user.hashed_password) => user,
            _ => {
                tracing::warn!("login rejected");
                return Err(DomainError::unauthenticated(BAD_CREDENTIALS));
            }
        };

        let access_token = self.token_service.generate_access_token(user.id)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Mint a new access token from a presented refresh token
    pub async fn refresh(&self, authorization: Option<&str>) -> DomainResult<String> {
        let refresh_token = get_bearer_token(authorization)?;
        let user_id = self
            .token_service
            .resolve_refresh_token(&refresh_token)
            .await?;

        self.token_service.generate_access_token(user_id)
    }

    /// Revoke a presented refresh token
    pub async fn revoke(&self, authorization: Option<&str>) -> DomainResult<()> {
        let refresh_token = get_bearer_token(authorization)?;
        self.token_service.revoke_refresh_token(&refresh_token).await
    }

    /// Replace an authenticated user's email and password
    pub async fn update_credentials(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::bad_request(MISSING_FIELDS));
        }

        let hashed_password = self.hasher.hash(password)?;
        self.user_repository
            .update_credentials(user_id, email, &hashed_password)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Handle a payment provider webhook
    ///
    /// The payload is taken as raw JSON. The API key is checked before any of
    /// it is read, and `data.userId` is only parsed for `user.upgraded`, so
    /// other events are acknowledged whatever their data looks like.
    pub async fn handle_webhook(
        &self,
        authorization: Option<&str>,
        payload: &Value,
    ) -> DomainResult<WebhookOutcome> {
        let api_key = get_api_key(authorization)?;
        if !validate_api_key(&api_key, &self.config.polka_api_key) {
            tracing::warn!("webhook rejected: api key mismatch");
            return Err(DomainError::unauthenticated(INVALID_API_KEY));
        }

        let event_name = payload.get("event").and_then(Value::as_str);
        if event_name != Some(USER_UPGRADED_EVENT) {
            tracing::debug!(event = ?event_name, "webhook event ignored");
            return Ok(WebhookOutcome::Ignored);
        }

        let event = WebhookEvent::deserialize(payload).map_err(|e| {
            tracing::debug!(error = %e, "webhook payload rejected");
            DomainError::bad_request(INVALID_WEBHOOK_PAYLOAD)
        })?;

        let user_id = event.data.user_id;
        self.user_repository
            .upgrade_to_chirpy_red(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        tracing::info!(%user_id, "user upgraded to chirpy red");
        Ok(WebhookOutcome::Upgraded)
    }

    /// Delete every user; only allowed on the dev platform
    pub async fn reset(&self, platform: Platform) -> DomainResult<u64> {
        if !platform.is_dev() {
            return Err(DomainError::forbidden(RESET_FORBIDDEN));
        }

        let deleted = self.user_repository.delete_all().await?;
        tracing::info!(deleted, "users reset");
        Ok(deleted)
    }
}

impl<U, T> Authenticator for AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    fn authenticate(&self, authorization: Option<&str>) -> DomainResult<Uuid> {
        let access_token = get_bearer_token(authorization)?;
        self.token_service.verify_access_token(&access_token)
    }
}
