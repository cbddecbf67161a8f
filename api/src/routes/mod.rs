//! Route handlers

pub mod admin;
pub mod auth;
pub mod chirps;
pub mod fileserver;
pub mod health;
pub mod users;
pub mod webhooks;
