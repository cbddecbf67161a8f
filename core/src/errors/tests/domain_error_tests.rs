//! Unit tests for domain error types

use crate::errors::{DomainError, ErrorKind, TokenError, INTERNAL_ERROR_MESSAGE};

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::InvalidToken.to_string(), "invalid token");
    assert_eq!(TokenError::InvalidIssuer.to_string(), "invalid issuer");
    assert_eq!(TokenError::NoSubject.to_string(), "no subject");
    assert_eq!(TokenError::NoTokenFound.to_string(), "no token found");
    assert_eq!(
        TokenError::MalformedAuthorizationHeader.to_string(),
        "malformed authorization header"
    );
}

#[test]
fn test_token_errors_are_unauthenticated() {
    let error: DomainError = TokenError::NoTokenFound.into();
    assert_eq!(error.kind(), ErrorKind::Unauthenticated);
    assert_eq!(error.status_code(), 401);
    assert_eq!(error.public_message(), "no token found");
}

#[test]
fn test_kind_status_codes() {
    assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    assert_eq!(ErrorKind::Unauthenticated.status_code(), 401);
    assert_eq!(ErrorKind::Forbidden.status_code(), 403);
    assert_eq!(ErrorKind::NotFound.status_code(), 404);
    assert_eq!(ErrorKind::Internal.status_code(), 500);
}

#[test]
fn test_expected_failures_surface_their_message() {
    let cases = vec![
        (DomainError::bad_request("missing required fields"), ErrorKind::BadRequest),
        (DomainError::unauthenticated("incorrect email or password"), ErrorKind::Unauthenticated),
        (DomainError::forbidden("not allowed"), ErrorKind::Forbidden),
        (DomainError::not_found("user not found"), ErrorKind::NotFound),
    ];

    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
        assert!(kind.exposes_message());
        assert_eq!(error.public_message(), error.to_string());
    }
}

#[test]
fn test_internal_failures_hide_detail() {
    let errors = vec![
        DomainError::Internal { message: "boom".to_string() },
        DomainError::persistence("connection refused to 10.0.0.3:5432"),
        DomainError::Hashing { message: "argon2 failure".to_string() },
    ];

    for error in errors {
        assert_eq!(error.kind(), ErrorKind::Internal);
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
        // detail is still available for server-side logging
        assert_ne!(error.to_string(), INTERNAL_ERROR_MESSAGE);
    }
}
