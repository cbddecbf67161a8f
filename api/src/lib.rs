//! # Chirpy API
//!
//! actix-web HTTP layer over the Chirpy core: route handlers, the bearer
//! authentication extractor, the static app's hit counter, and translation of
//! domain errors into JSON responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
