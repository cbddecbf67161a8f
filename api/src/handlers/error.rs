//! Translation of domain errors into HTTP responses

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chirpy_core::errors::{DomainError, ErrorKind};
use chirpy_shared::errors::ErrorResponse;

/// Convert a domain error into an HTTP response
///
/// Expected failures carry their own message; internal failures are logged
/// in full here and answered with the generic message only.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let kind = error.kind();

    if kind == ErrorKind::Internal {
        log::error!("Internal error: {:?}", error);
    } else {
        log::debug!("Request rejected ({:?}): {}", kind, error);
    }

    let status =
        StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse::new(error.public_message()))
}

/// Wrapper that lets a domain error flow through actix's error channel
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}
