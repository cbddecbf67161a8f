//! Credential extraction from inbound `Authorization` headers
//!
//! User tokens and service keys guard different trust boundaries, so each
//! scheme has its own entry point and its own failure kind.

mod api_key;
mod extract;

pub use api_key::{get_api_key, validate_api_key, API_KEY_SCHEME};
pub use extract::{get_bearer_token, BEARER_SCHEME};
