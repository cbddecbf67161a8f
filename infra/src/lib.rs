//! # Infrastructure Layer
//!
//! Concrete persistence for the Chirpy backend: PostgreSQL implementations
//! of the repository traits declared in `chirpy_core`, plus connection pool
//! management and schema migrations.

pub mod database;

pub use database::{DatabasePool, PgChirpRepository, PgTokenRepository, PgUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
