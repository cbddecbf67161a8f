use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::authorization_header;

/// Handler for POST /api/revoke
///
/// Revokes the refresh token presented as `Authorization: Bearer <token>`.
/// Revoking an unknown or already revoked token still answers 204.
pub async fn revoke<U, T>(req: HttpRequest, state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.auth_service.revoke(authorization_header(&req)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
