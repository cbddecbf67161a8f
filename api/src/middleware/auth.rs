//! Bearer access-token authentication for protected handlers.
//!
//! [`AuthenticatedUser`] is an extractor: listing it as a handler argument
//! runs bearer extraction and access-token verification before the handler
//! body. Verification is delegated to the [`Authenticator`] registered as
//! app data, which is the auth service itself.

use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorInternalServerError, http::header::AUTHORIZATION, web, Error,
    FromRequest, HttpRequest,
};
use chirpy_core::services::auth::Authenticator;
use uuid::Uuid;

use crate::handlers::ApiError;

/// Identity of the caller, proven by a valid access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Raw `Authorization` header value, if present and valid UTF-8
pub fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(authenticator) = req.app_data::<web::Data<dyn Authenticator>>() else {
            log::error!("Authenticator missing from app data");
            return ready(Err(ErrorInternalServerError("authentication not configured")));
        };

        let result = authenticator
            .authenticate(authorization_header(req))
            .map(|user_id| AuthenticatedUser { user_id })
            .map_err(|e| Error::from(ApiError(e)));

        ready(result)
    }
}
