//! # Chirpy Core
//!
//! Authentication and session-lifecycle layer for the Chirpy backend.
//! This crate contains domain entities, the error taxonomy, repository
//! interfaces, and the services that hash passwords, issue and verify tokens,
//! check service API keys, and manage chirps on behalf of authenticated users.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Chirp, Claims, RefreshToken, SortDirection, User};
pub use domain::value_objects::{LoginResult, WebhookEvent, WebhookOutcome};
pub use errors::{DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{ChirpRepository, TokenRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, Authenticator, ChirpService, PasswordHasher, TokenService,
    TokenServiceConfig,
};
