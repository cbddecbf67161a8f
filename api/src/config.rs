//! Startup configuration loading

use chirpy_shared::config::{AppConfig, ConfigError};

/// Load the application configuration
///
/// Reads a `.env` file when present, then the process environment. Called
/// once at startup; the result is injected into the app and never re-read.
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    log::info!(
        "Configuration loaded: platform={}, bind={}, db_max_connections={}",
        config.platform,
        config.server.bind_address(),
        config.database.max_connections
    );

    Ok(config)
}
