//! PostgreSQL repository implementations

mod chirp_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use chirp_repository_impl::PgChirpRepository;
pub use token_repository_impl::PgTokenRepository;
pub use user_repository_impl::PgUserRepository;

use chirpy_core::errors::DomainError;

/// Wrap a driver error as a persistence failure of the given operation
pub(crate) fn persistence_error(operation: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %error, "database operation failed");
    DomainError::persistence(format!("{}: {}", operation, error))
}
