//! Authentication service module
//!
//! Orchestrates the request flows built on the auth components:
//! - Registration and login
//! - Access token refresh and refresh token revocation
//! - Bearer authentication and credential updates
//! - The payment provider upgrade webhook

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, Authenticator};
