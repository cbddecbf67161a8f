//! Bearer credential extraction

use crate::errors::{DomainError, TokenError};

/// Scheme name for user tokens
pub const BEARER_SCHEME: &str = "Bearer";

/// Split `<scheme> <value>` into its value when the scheme matches exactly
///
/// The header must be exactly two space-separated parts and the value must be
/// non-empty.
pub(super) fn split_scheme<'a>(header: &'a str, scheme: &str) -> Option<&'a str> {
    let mut parts = header.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(found), Some(value), None) if found == scheme && !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// Used for both access and refresh tokens; the caller picks the
/// verification path.
///
/// # Errors
///
/// `TokenError::MalformedAuthorizationHeader` (unauthenticated) when the
/// header is absent or not of the exact form.
///
/// # Example
///
/// ```rust
/// use chirpy_core::services::credentials::get_bearer_token;
///
/// assert_eq!(get_bearer_token(Some("Bearer abc123")).unwrap(), "abc123");
/// assert!(get_bearer_token(Some("Basic abc123")).is_err());
/// ```
pub fn get_bearer_token(header: Option<&str>) -> Result<String, DomainError> {
    header
        .and_then(|h| split_scheme(h, BEARER_SCHEME))
        .map(str::to_string)
        .ok_or_else(|| TokenError::MalformedAuthorizationHeader.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_valid_header() {
        assert_eq!(get_bearer_token(Some("Bearer abc123")).unwrap(), "abc123");
    }

    #[test]
    fn test_rejected_headers() {
        for header in ["Basic abc123", "", "Bearer", "Bearer ", "bearer abc", "Bearer a b"] {
            let err = get_bearer_token(Some(header)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthenticated, "header {:?}", header);
            assert_eq!(err.public_message(), "malformed authorization header");
        }
    }

    #[test]
    fn test_missing_header() {
        let err = get_bearer_token(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }
}
