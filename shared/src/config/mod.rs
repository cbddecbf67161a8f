//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing secret, token lifetimes and the webhook API key
//! - `database` - Database connection and pool configuration
//! - `environment` - Platform detection (dev vs production)
//! - `server` - HTTP listener configuration
//!
//! The whole configuration is read once at startup and treated as immutable
//! afterwards; nothing below re-reads the environment.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Platform;
pub use server::ServerConfig;

/// Errors raised while building the configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVar(String),

    #[error("Environment variable {key} has an invalid value: {value}")]
    InvalidVar { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Deployment platform, gates destructive admin endpoints
    pub platform: Platform,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// Required variables: `PLATFORM`, `JWT_SECRET`, `POLKA_KEY`, `DB_URL`.
    /// Optional: `HOST`, `PORT`, `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform_raw = required(&lookup, "PLATFORM")?;
        let platform = platform_raw
            .parse::<Platform>()
            .map_err(|_| ConfigError::InvalidVar {
                key: "PLATFORM".to_string(),
                value: platform_raw.clone(),
            })?;

        Ok(Self {
            platform,
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
        })
    }
}

/// Fetch a variable that must be present and non-empty
pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key.to_string())),
    }
}

/// Fetch and parse an optional variable, falling back to `default` when unset
pub(crate) fn optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => {
            value.parse::<T>().map_err(|_| ConfigError::InvalidVar {
                key: key.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}
