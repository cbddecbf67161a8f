//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, Error, HttpResponse,
};

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};
use chirpy_core::services::{auth::AuthService, chirp::ChirpService, Authenticator};
use chirpy_shared::config::Platform;
use chirpy_shared::errors::ErrorResponse;

use crate::metrics::ServerMetrics;
use crate::middleware::CountFileServerHits;
use crate::routes::{admin, auth, chirps, fileserver, health, users, webhooks};

/// Application state that holds shared services
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub platform: Platform,
    pub metrics: Arc<ServerMetrics>,
}

impl<U, T> AppState<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, T>>, platform: Platform) -> Self {
        Self {
            auth_service,
            platform,
            metrics: Arc::new(ServerMetrics::new()),
        }
    }
}

/// Create and configure the application with all dependencies
///
/// The auth service is also registered as the [`Authenticator`] read by the
/// [`AuthenticatedUser`](crate::middleware::AuthenticatedUser) extractor, so
/// protected routes verify tokens with the same secret that signed them.
pub fn create_app<U, T, C>(
    app_state: web::Data<AppState<U, T>>,
    chirp_service: web::Data<ChirpService<C>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    let authenticator: Arc<dyn Authenticator> = app_state.auth_service.clone();
    let metrics = app_state.metrics.clone();

    App::new()
        .app_data(app_state)
        .app_data(chirp_service)
        .app_data(web::Data::from(authenticator))
        .app_data(json_config())
        .service(
            web::scope("/app")
                .wrap(CountFileServerHits::new(metrics))
                .route("", web::get().to(fileserver::index))
                .route("/", web::get().to(fileserver::index)),
        )
        .service(
            web::scope("/admin")
                .route("/metrics", web::get().to(admin::metrics::<U, T>))
                .route("/reset", web::post().to(admin::reset::<U, T>)),
        )
        .service(
            web::scope("/api")
                .route("/healthz", web::get().to(health::readiness))
                .route("/users", web::post().to(users::create_user::<U, T>))
                .route("/users", web::put().to(users::update_user::<U, T>))
                .route("/login", web::post().to(auth::login::<U, T>))
                .route("/refresh", web::post().to(auth::refresh::<U, T>))
                .route("/revoke", web::post().to(auth::revoke::<U, T>))
                .route("/chirps", web::post().to(chirps::create_chirp::<C>))
                .route("/chirps", web::get().to(chirps::list_chirps::<C>))
                .route("/chirps/{chirp_id}", web::get().to(chirps::get_chirp::<C>))
                .route(
                    "/chirps/{chirp_id}",
                    web::delete().to(chirps::delete_chirp::<C>),
                )
                .route(
                    "/polka/webhooks",
                    web::post().to(webhooks::polka_webhook::<U, T>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Answer unparsable JSON bodies in the same `{"error": ...}` shape
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new("invalid request body"));
        InternalError::from_response(err, response).into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not found"))
}
