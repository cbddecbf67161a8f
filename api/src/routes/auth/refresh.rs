use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::TokenResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::authorization_header;

/// Handler for POST /api/refresh
///
/// Mints a new access token from the refresh token presented as
/// `Authorization: Bearer <refresh token>`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Malformed header, or the refresh token is absent,
///   revoked or expired
pub async fn refresh<U, T>(req: HttpRequest, state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.auth_service.refresh(authorization_header(&req)).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(&error),
    }
}
