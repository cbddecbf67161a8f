//! Configuration for the authentication service

use chirpy_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Shared secret expected from the payment provider
    pub polka_api_key: String,
}

impl AuthServiceConfig {
    pub fn new(polka_api_key: impl Into<String>) -> Self {
        Self {
            polka_api_key: polka_api_key.into(),
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self::new(config.polka_api_key.clone())
    }
}
