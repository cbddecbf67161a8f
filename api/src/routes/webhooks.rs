//! Payment provider webhook

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::authorization_header;

/// Handler for POST /api/polka/webhooks
///
/// Requires `Authorization: ApiKey <key>`. The body only has to be JSON;
/// its shape is checked after the key. Both handled and ignored events
/// answer 204.
///
/// ## Errors
/// - 400 Bad Request: Malformed authorization header, or a `user.upgraded`
///   event without a valid `data.userId`
/// - 401 Unauthorized: Wrong API key
/// - 404 Not Found: `user.upgraded` for an unknown user
pub async fn polka_webhook<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    payload: web::Json<Value>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .handle_webhook(authorization_header(&req), &payload)
        .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
