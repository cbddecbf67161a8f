//! User account handlers

use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CredentialsRequest, UserResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthenticatedUser;

/// Handler for POST /api/users
///
/// ## Errors
/// - 400 Bad Request: Missing email or password, or email already registered
pub async fn create_user<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/users
///
/// Replaces the caller's email and password. Requires
/// `Authorization: Bearer <access token>`.
pub async fn update_user<U, T>(
    auth: AuthenticatedUser,
    state: web::Data<AppState<U, T>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .update_credentials(auth.user_id, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
