//! Configuration for the token service

use chirpy_shared::config::AuthConfig;

use crate::domain::entities::token::{DEFAULT_ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_ttl_seconds: DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt.secret.clone(),
            access_token_ttl_seconds: config.jwt.access_token_ttl_seconds,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
        }
    }
}
