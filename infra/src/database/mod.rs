//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Repository implementations for users, refresh tokens and chirps
//! - Embedded schema migrations

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use postgres::{PgChirpRepository, PgTokenRepository, PgUserRepository};
