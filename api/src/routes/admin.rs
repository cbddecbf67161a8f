//! Administration endpoints

use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /admin/metrics
pub async fn metrics<U, T>(state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    let page = format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>",
        state.metrics.file_server_hits()
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// Handler for POST /admin/reset
///
/// Deletes every user, their chirps and refresh tokens with them, then
/// zeroes the hit counter. Answers 403 unless the platform is `dev`.
pub async fn reset<U, T>(state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.auth_service.reset(state.platform).await {
        Ok(deleted) => {
            state.metrics.reset();
            log::info!("Reset removed {} users", deleted);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body("Hits reset to 0")
        }
        Err(error) => handle_domain_error(&error),
    }
}
