//! Token service module
//!
//! This module handles all token-related operations:
//! - Stateless access token issuance and verification (HS256 JWT)
//! - Opaque refresh token issuance, resolution and revocation

mod access;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use access::{issue_access_token, verify_access_token};
pub use config::TokenServiceConfig;
pub use service::{make_refresh_token, TokenService};
