//! Domain-specific error types and error handling.
//!
//! Every failure of the auth core is a [`DomainError`]. Callers classify it
//! with [`DomainError::kind`] and surface it with
//! [`DomainError::public_message`]; internal detail never leaves the server.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ErrorKind, TokenError, INTERNAL_ERROR_MESSAGE};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Unauthenticated { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A store read or write did not succeed
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// The password hashing library failed internally
    #[error("Hashing error: {message}")]
    Hashing { message: String },

    // Bridge to the fixed token failures
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated { message: message.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence { message: message.into() }
    }

    /// Classify the error into one of the externally visible kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::BadRequest { .. } => ErrorKind::BadRequest,
            DomainError::Unauthenticated { .. } | DomainError::Token(_) => {
                ErrorKind::Unauthenticated
            }
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. }
            | DomainError::Persistence { .. }
            | DomainError::Hashing { .. } => ErrorKind::Internal,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Message that may be shown to the caller
    ///
    /// Expected failures surface their own message; anything classified as
    /// `Internal` collapses to [`INTERNAL_ERROR_MESSAGE`].
    pub fn public_message(&self) -> String {
        if self.kind().exposes_message() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
