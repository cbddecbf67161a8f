use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use log::info;

use chirpy_api::{app::create_app, config, AppState};
use chirpy_core::services::{
    auth::{AuthService, AuthServiceConfig},
    chirp::ChirpService,
    token::{TokenService, TokenServiceConfig},
};
use chirpy_infra::{DatabasePool, PgChirpRepository, PgTokenRepository, PgUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Chirpy API Server");

    let config = config::load()?;

    let pool = DatabasePool::new(&config.database).await?;
    pool.run_migrations().await?;

    let user_repository = Arc::new(PgUserRepository::new(pool.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(
        PgTokenRepository::new(pool.get_pool().clone()),
        TokenServiceConfig::from(&config.auth),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));

    let chirp_service = web::Data::new(ChirpService::new(Arc::new(PgChirpRepository::new(
        pool.get_pool().clone(),
    ))));

    let app_state = web::Data::new(AppState::new(auth_service, config.platform));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        create_app(app_state.clone(), chirp_service.clone()).wrap(Logger::default())
    })
    .bind(&bind_address)?
    .run()
    .await?;

    pool.close().await;
    Ok(())
}
