use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CredentialsRequest, LoginResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/login
///
/// # Request Body
///
/// ```json
/// { "email": "walt@breakingbad.com", "password": "04234" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The user plus `token` (access token) and `refreshToken`.
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password
/// - 500 Internal Server Error: Refresh token could not be stored
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(LoginResponse::from(result)),
        Err(error) => handle_domain_error(&error),
    }
}
