//! Service API key extraction and validation

use constant_time_eq::constant_time_eq;

use crate::errors::DomainError;

use super::extract::split_scheme;

/// Scheme name for service keys
pub const API_KEY_SCHEME: &str = "ApiKey";

const MALFORMED_HEADER: &str = "malformed authorization header";

/// Extract the key from an `Authorization: ApiKey <key>` header
///
/// A malformed header is a caller programming error rather than an
/// authentication failure, so it is reported as a bad request.
pub fn get_api_key(header: Option<&str>) -> Result<String, DomainError> {
    header
        .and_then(|h| split_scheme(h, API_KEY_SCHEME))
        .map(str::to_string)
        .ok_or_else(|| DomainError::bad_request(MALFORMED_HEADER))
}

/// Compare a presented key with the configured one
///
/// Exact equality, compared in constant time.
pub fn validate_api_key(key: &str, configured: &str) -> bool {
    constant_time_eq(key.as_bytes(), configured.as_bytes())
}
