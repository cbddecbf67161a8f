//! Request extractors and middleware

pub mod auth;
pub mod metrics;

pub use auth::AuthenticatedUser;
pub use metrics::CountFileServerHits;
