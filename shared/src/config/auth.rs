//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{optional_parsed, required, ConfigError};

/// Default access token lifetime in seconds (1 hour)
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 3600;

/// Default refresh token lifetime in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify access tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl_seconds: DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
        }
    }

    /// Set access token lifetime in seconds
    pub fn with_access_ttl_seconds(mut self, seconds: i64) -> Self {
        self.access_token_ttl_seconds = seconds;
        self
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Shared secret expected from the payment provider's webhook calls
    pub polka_api_key: String,

    /// Refresh token lifetime in days
    #[serde(default = "default_refresh_expiry_days")]
    pub refresh_token_expiry_days: i64,
}

impl AuthConfig {
    /// Create an auth configuration from a signing secret and the webhook key
    pub fn new(jwt_secret: impl Into<String>, polka_api_key: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig::new(jwt_secret),
            polka_api_key: polka_api_key.into(),
            refresh_token_expiry_days: DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(lookup, "JWT_SECRET")?;
        let polka_api_key = required(lookup, "POLKA_KEY")?;
        let access_token_ttl_seconds = optional_parsed(
            lookup,
            "ACCESS_TOKEN_TTL_SECONDS",
            DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
        )?;

        Ok(Self {
            jwt: JwtConfig::new(secret).with_access_ttl_seconds(access_token_ttl_seconds),
            polka_api_key,
            refresh_token_expiry_days: DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
        })
    }
}

fn default_refresh_expiry_days() -> i64 {
    DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS
}
