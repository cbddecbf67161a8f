//! Error classification and the fixed token failure set

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to callers for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong on our end";

/// Token and credential failures
///
/// All of these classify as [`ErrorKind::Unauthenticated`]. The messages are
/// part of the public contract and are returned to callers verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, malformed structure or past expiry
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid issuer")]
    InvalidIssuer,

    #[error("no subject")]
    NoSubject,

    /// Refresh token absent, revoked or expired; the three are not distinguished
    #[error("no token found")]
    NoTokenFound,

    #[error("malformed authorization header")]
    MalformedAuthorizationHeader,
}

/// Externally visible error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    Unauthenticated,
    Forbidden,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// HTTP status code for the kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// Whether the error's own message may be shown to the caller
    pub fn exposes_message(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}
