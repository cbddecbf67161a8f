//! Shared utilities and common types for the Chirpy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - The JSON error body returned by every failing endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, JwtConfig, Platform, ServerConfig,
};
pub use errors::ErrorResponse;
